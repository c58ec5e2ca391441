//! Progressive annual income tax.
//!
//! Each bracket taxes only the slice of income between its `min` and `max`
//! at its own marginal rate. Brackets own the half-open range `[min, max)`
//! except for the top bracket, which is unbounded; income sitting exactly on a
//! boundary is fully taxed inside the lower bracket.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxBracket;

use super::rounding::round_money;

/// The slice of income taxed within one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPortion {
    /// The lower bound of the bracket.
    pub min: Decimal,
    /// The upper bound of the bracket, `None` for the top bracket.
    pub max: Option<Decimal>,
    /// The bracket's marginal rate.
    pub rate: Decimal,
    /// The income falling inside the bracket.
    pub taxable_amount: Decimal,
    /// `taxable_amount × rate`, unrounded.
    pub tax: Decimal,
}

/// Annual income tax with its per-bracket detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// The income the tax was computed on.
    pub annual_taxable_income: Decimal,
    /// One entry per bracket the income reaches, in ascending order.
    pub portions: Vec<BracketPortion>,
    /// The sum of all portions, rounded once to two decimal places.
    pub annual_tax: Decimal,
}

/// Walks the brackets the income reaches.
///
/// Brackets are contiguous, so the walk stops at the first bracket whose
/// `min` is not below the income, i.e. right after the bracket whose `max`
/// the income does not exceed.
fn bracket_portions(
    income: Decimal,
    brackets: &[TaxBracket],
) -> impl Iterator<Item = BracketPortion> + '_ {
    brackets
        .iter()
        .take_while(move |bracket| income > bracket.min)
        .map(move |bracket| {
            let upper = bracket.max.map_or(income, |max| income.min(max));
            let taxable_amount = upper - bracket.min;
            BracketPortion {
                min: bracket.min,
                max: bracket.max,
                rate: bracket.rate,
                taxable_amount,
                tax: taxable_amount * bracket.rate,
            }
        })
}

/// Calculates the annual income tax on `annual_taxable_income`.
///
/// Income at or below zero is not taxed. The per-bracket amounts are summed
/// unrounded and the total is rounded once, at the end.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_annual_income_tax;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
///
/// // 0% on the first 5,000 and 26% on the next 5,000
/// let tax = calculate_annual_income_tax(Decimal::new(10000, 0), config.tax_brackets());
/// assert_eq!(tax, Decimal::new(130000, 2));
///
/// // 0% on 5,000, 26% on 15,000 and 28% on 5,000
/// let tax = calculate_annual_income_tax(Decimal::new(25000, 0), config.tax_brackets());
/// assert_eq!(tax, Decimal::new(530000, 2));
/// ```
pub fn calculate_annual_income_tax(
    annual_taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let total: Decimal = bracket_portions(annual_taxable_income, brackets)
        .map(|portion| portion.tax)
        .sum();
    round_money(total)
}

/// Calculates the annual income tax and keeps the per-bracket detail.
///
/// The `annual_tax` field always equals [`calculate_annual_income_tax`] for
/// the same inputs.
pub fn calculate_annual_income_tax_detailed(
    annual_taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> IncomeTaxResult {
    let portions: Vec<BracketPortion> = bracket_portions(annual_taxable_income, brackets).collect();
    let annual_tax = round_money(portions.iter().map(|portion| portion.tax).sum());

    IncomeTaxResult {
        annual_taxable_income,
        portions,
        annual_tax,
    }
}
