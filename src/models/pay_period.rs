//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type bounding a payroll record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Represents the date range a payroll record covers.
///
/// Deserialization goes through [`PayPeriod::new`], so a period that ends
/// before it starts is rejected there as well.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// )?;
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert_eq!(period.duration_days(), 31);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PayPeriodFields")]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
struct PayPeriodFields {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<PayPeriodFields> for PayPeriod {
    type Error = PayrollError;

    fn try_from(fields: PayPeriodFields) -> PayrollResult<Self> {
        PayPeriod::new(fields.start_date, fields.end_date)
    }
}

impl PayPeriod {
    /// Creates a pay period, rejecting one that ends before it starts.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> PayrollResult<Self> {
        if end_date < start_date {
            return Err(PayrollError::InvalidPayPeriod {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of days in the pay period, inclusive of both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
