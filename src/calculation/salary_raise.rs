//! Percentage salary raises.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

use super::rounding::round_money;

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Applies a percentage raise to a base salary.
///
/// Returns `round(base_salary × (1 + percentage / 100), 2)`. A base salary that
/// is not configured (zero or less) is returned unchanged. Negative percentages
/// are cuts; anything below -100% would make the salary negative and is rejected.
/// A raise whose result no longer fits in a `Decimal` is rejected as well.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_percentage_raise;
/// use rust_decimal::Decimal;
///
/// let raised = apply_percentage_raise(Decimal::new(1500, 0), Decimal::new(35, 1))?;
/// assert_eq!(raised, Decimal::new(155250, 2));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn apply_percentage_raise(base_salary: Decimal, percentage: Decimal) -> PayrollResult<Decimal> {
    if percentage < -ONE_HUNDRED {
        return Err(PayrollError::InvalidArgument {
            field: "percentage".to_string(),
            message: format!("{}% would make the salary negative", percentage.normalize()),
        });
    }

    if base_salary <= Decimal::ZERO {
        return Ok(base_salary);
    }

    let raised = (Decimal::ONE + percentage / ONE_HUNDRED)
        .checked_mul(base_salary)
        .ok_or_else(|| PayrollError::too_large("base_salary"))?;
    Ok(round_money(raised))
}
