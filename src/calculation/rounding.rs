//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every monetary output carries.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to two decimal places, half away from zero.
///
/// The result always carries exactly two decimal places, so `1000` becomes
/// `1000.00` when displayed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("127.798").unwrap()).to_string(), "127.80");
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// assert_eq!(round_money(Decimal::from(1000)).to_string(), "1000.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_money(dec("123.454")), dec("123.45"));
    }

    #[test]
    fn test_rounds_up_at_midpoint() {
        assert_eq!(round_money(dec("123.455")), dec("123.46"));
        assert_eq!(round_money(dec("0.005")), dec("0.01"));
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec("-123.455")), dec("-123.46"));
    }

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(round_money(dec("5")).to_string(), "5.00");
        assert_eq!(round_money(dec("9.1800")).to_string(), "9.18");
        assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
    }
}
