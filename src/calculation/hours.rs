//! Splitting attended hours into normal and overtime hours.
//!
//! The overtime figure the calculator consumes is whatever an employee
//! attended beyond the standard monthly hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Attended hours for a period, split at the standard monthly hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours up to the standard monthly hours.
    pub normal_hours: Decimal,
    /// Hours beyond the standard monthly hours (can be zero).
    pub overtime_hours: Decimal,
}

/// Splits `worked_hours` into normal hours and overtime hours.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidArgument`] if `worked_hours` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_worked_hours;
/// use rust_decimal::Decimal;
///
/// let split = split_worked_hours(Decimal::new(185, 0), Decimal::new(173, 0))?;
/// assert_eq!(split.normal_hours, Decimal::new(173, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(12, 0));
///
/// let split = split_worked_hours(Decimal::new(150, 0), Decimal::new(173, 0))?;
/// assert_eq!(split.normal_hours, Decimal::new(150, 0));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn split_worked_hours(
    worked_hours: Decimal,
    standard_monthly_hours: Decimal,
) -> PayrollResult<HoursSplit> {
    if worked_hours < Decimal::ZERO {
        return Err(PayrollError::negative("worked_hours"));
    }

    let normal_hours = worked_hours.min(standard_monthly_hours);
    let overtime_hours = (worked_hours - standard_monthly_hours).max(Decimal::ZERO);

    Ok(HoursSplit {
        normal_hours,
        overtime_hours,
    })
}
