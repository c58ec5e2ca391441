//! Payroll generation for one employee or a whole workforce.
//!
//! Generation wraps the pure calculator: it derives overtime from attended
//! hours, refuses employees without a salary or with a payroll already on
//! file for the period, and builds [`PayrollRecord`] values for the caller to
//! persist.

use std::collections::HashMap;
use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{HoursSplit, PayrollCalculator};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayPeriod, PayrollBreakdown, PayrollRecord};

/// A payroll computed for an employee without creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPreview {
    /// The employee previewed.
    pub employee_id: String,
    /// Attended hours split into normal and overtime hours.
    pub hours: HoursSplit,
    /// The breakdown the payroll would carry.
    pub breakdown: PayrollBreakdown,
}

/// One employee a batch could not generate a payroll for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// The employee that failed.
    pub employee_id: String,
    /// The employee's display name.
    pub full_name: String,
    /// Why generation failed.
    pub reason: String,
}

/// The result of generating payroll for many employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Identifier of this batch run, for log correlation.
    pub batch_id: Uuid,
    /// Records generated successfully.
    pub records: Vec<PayrollRecord>,
    /// Employees that were skipped because of an error.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Sum of net salaries over the generated records.
    pub fn total_net_salary(&self) -> Decimal {
        self.records.iter().map(|r| r.breakdown.net_salary).sum()
    }
}

/// Generates payroll records using a [`PayrollCalculator`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::generation::PayrollGenerator;
/// use payroll_engine::models::{Employee, PayPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let generator = PayrollGenerator::new(PayrollCalculator::default());
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     full_name: "Amira Ben Salah".to_string(),
///     base_salary: Decimal::new(1730, 0),
///     active: true,
/// };
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// )?;
///
/// let record = generator.generate(&employee, period, Decimal::new(183, 0), &[])?;
/// assert_eq!(record.breakdown.overtime_hours, Decimal::new(10, 0));
/// assert_eq!(record.breakdown.gross_salary, Decimal::new(185500, 2));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollGenerator {
    calculator: PayrollCalculator,
}

impl PayrollGenerator {
    /// Creates a generator around a calculator.
    pub fn new(calculator: PayrollCalculator) -> Self {
        Self { calculator }
    }

    /// Returns the calculator in use.
    pub fn calculator(&self) -> &PayrollCalculator {
        &self.calculator
    }

    /// Computes what an employee's payroll would be for `worked_hours`.
    pub fn preview(
        &self,
        employee: &Employee,
        worked_hours: Decimal,
    ) -> PayrollResult<PayrollPreview> {
        let hours = self.calculator.split_worked_hours(worked_hours)?;
        let breakdown = self
            .calculator
            .simulate(employee.base_salary, hours.overtime_hours)?;

        Ok(PayrollPreview {
            employee_id: employee.id.clone(),
            hours,
            breakdown,
        })
    }

    /// Generates a payroll record for one employee and period.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::DuplicatePayroll`] if `existing` already covers the
    ///   employee and period
    /// - [`PayrollError::SalaryNotConfigured`] if the base salary is not positive
    /// - [`PayrollError::InvalidArgument`] if `worked_hours` is negative
    pub fn generate(
        &self,
        employee: &Employee,
        period: PayPeriod,
        worked_hours: Decimal,
        existing: &[PayrollRecord],
    ) -> PayrollResult<PayrollRecord> {
        if existing.iter().any(|r| r.covers(&employee.id, &period)) {
            return Err(PayrollError::DuplicatePayroll {
                employee_id: employee.id.clone(),
                start_date: period.start_date,
                end_date: period.end_date,
            });
        }

        if !employee.has_salary_configured() {
            return Err(PayrollError::SalaryNotConfigured {
                employee_id: employee.id.clone(),
            });
        }

        let preview = self.preview(employee, worked_hours)?;
        Ok(PayrollRecord::new(
            employee.id.clone(),
            period,
            preview.hours.normal_hours,
            preview.breakdown,
        ))
    }

    /// Generates payroll records for every active employee.
    ///
    /// Inactive employees are skipped. Employees missing from
    /// `worked_hours_by_employee` are treated as having attended zero hours.
    /// A failure for one employee is recorded in the outcome and never stops
    /// the batch.
    pub fn generate_all(
        &self,
        employees: &[Employee],
        period: PayPeriod,
        worked_hours_by_employee: &HashMap<String, Decimal>,
        existing: &[PayrollRecord],
    ) -> BatchOutcome {
        let batch_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(
            batch_id = %batch_id,
            start_date = %period.start_date,
            end_date = %period.end_date,
            "Generating payroll batch"
        );

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for employee in employees.iter().filter(|e| e.active) {
            let worked_hours = worked_hours_by_employee
                .get(&employee.id)
                .copied()
                .unwrap_or(Decimal::ZERO);

            match self.generate(employee, period, worked_hours, existing) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(
                        batch_id = %batch_id,
                        employee_id = %employee.id,
                        error = %err,
                        "Payroll generation failed"
                    );
                    failures.push(BatchFailure {
                        employee_id: employee.id.clone(),
                        full_name: employee.full_name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            batch_id = %batch_id,
            generated = records.len(),
            failed = failures.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Payroll batch completed"
        );

        BatchOutcome {
            batch_id,
            records,
            failures,
        }
    }
}
