//! Employee model.
//!
//! This module defines the [`Employee`] struct, the payroll-relevant slice of
//! an employee record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose payroll is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub full_name: String,
    /// The configured monthly base salary. Zero means not configured yet.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Whether the employee is currently employed.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Returns true if a positive base salary has been configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     full_name: "Amira Ben Salah".to_string(),
    ///     base_salary: Decimal::new(1500, 0),
    ///     active: true,
    /// };
    /// assert!(employee.has_salary_configured());
    /// ```
    pub fn has_salary_configured(&self) -> bool {
        self.base_salary > Decimal::ZERO
    }
}
