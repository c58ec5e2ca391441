//! Payroll record models.
//!
//! This module contains the [`PayrollRecord`] produced when a payroll is
//! generated for one employee and one period, and its [`PayrollStatus`]
//! workflow.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

use super::{PayPeriod, PayrollBreakdown};

/// The workflow status of a payroll record.
///
/// Records start as `Generated`, may be `Validated` by HR, and end as `Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Computed but not yet reviewed.
    Generated,
    /// Reviewed and approved for payment.
    Validated,
    /// Paid out to the employee.
    Paid,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayrollStatus::Generated => "generated",
            PayrollStatus::Validated => "validated",
            PayrollStatus::Paid => "paid",
        };
        f.write_str(name)
    }
}

/// A generated payroll for one employee over one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee the payroll belongs to.
    pub employee_id: String,
    /// The period the payroll covers.
    pub period: PayPeriod,
    /// Attended hours up to the standard monthly hours.
    pub normal_hours: Decimal,
    /// The computed breakdown, stored verbatim.
    pub breakdown: PayrollBreakdown,
    /// Current workflow status.
    pub status: PayrollStatus,
    /// When the record was generated.
    pub generated_at: DateTime<Utc>,
    /// The payment date, once paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

impl PayrollRecord {
    /// Creates a freshly generated record.
    pub fn new(
        employee_id: impl Into<String>,
        period: PayPeriod,
        normal_hours: Decimal,
        breakdown: PayrollBreakdown,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            period,
            normal_hours,
            breakdown,
            status: PayrollStatus::Generated,
            generated_at: Utc::now(),
            paid_on: None,
        }
    }

    /// Returns true if this record covers the given employee and period.
    pub fn covers(&self, employee_id: &str, period: &PayPeriod) -> bool {
        self.employee_id == employee_id && self.period == *period
    }

    /// Moves a generated record to `Validated`.
    pub fn validate(&mut self) -> PayrollResult<()> {
        self.transition(PayrollStatus::Validated, &[PayrollStatus::Generated])
    }

    /// Marks the record as paid on the given date.
    ///
    /// Both generated and validated records can be paid; a paid record cannot
    /// be paid twice.
    pub fn mark_paid(&mut self, paid_on: NaiveDate) -> PayrollResult<()> {
        self.transition(
            PayrollStatus::Paid,
            &[PayrollStatus::Generated, PayrollStatus::Validated],
        )?;
        self.paid_on = Some(paid_on);
        Ok(())
    }

    /// Returns true once the record has been paid.
    pub fn is_paid(&self) -> bool {
        self.status == PayrollStatus::Paid
    }

    fn transition(&mut self, to: PayrollStatus, allowed_from: &[PayrollStatus]) -> PayrollResult<()> {
        if !allowed_from.contains(&self.status) {
            return Err(PayrollError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
