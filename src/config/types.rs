//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML payroll configuration file, and the
//! validated [`PayrollConfig`] the calculator is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Default employee social-security contribution rate (CNSS, 9.18%).
pub const DEFAULT_CONTRIBUTION_RATE: Decimal = Decimal::from_parts(918, 0, 0, false, 4);

/// Default standard monthly hours (40 hours/week × 52 weeks ÷ 12 months).
pub const DEFAULT_STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(173, 0, 0, false, 0);

/// Default overtime multiplier (125% of the hourly rate).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// A single annual income tax bracket.
///
/// A bracket owns the half-open income range `[min, max)`. The last bracket
/// of a table has no `max` and extends to infinity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket.
    pub min: Decimal,
    /// The upper bound of the bracket, or `None` when unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    /// The marginal rate applied to income inside the bracket, as a fraction.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bounded bracket.
    pub fn bounded(min: Decimal, max: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    /// Creates the unbounded top bracket.
    pub fn unbounded(min: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }
}

/// Payroll configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfigFile {
    /// Annual income tax brackets, ascending by `min`.
    pub tax_brackets: Vec<TaxBracket>,
    /// Employee social-security contribution rate.
    pub contribution_rate: Decimal,
    /// Standard working hours in a month.
    pub standard_monthly_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime.
    pub overtime_multiplier: Decimal,
}

impl TryFrom<PayrollConfigFile> for PayrollConfig {
    type Error = PayrollError;

    fn try_from(file: PayrollConfigFile) -> PayrollResult<Self> {
        PayrollConfig::new(
            file.tax_brackets,
            file.contribution_rate,
            file.standard_monthly_hours,
            file.overtime_multiplier,
        )
    }
}

/// The validated, immutable payroll configuration.
///
/// A `PayrollConfig` can only be obtained through [`PayrollConfig::new`] (or
/// the loader, which calls it), so every instance has a contiguous bracket
/// table starting at zero and a positive number of standard monthly hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollConfig {
    tax_brackets: Vec<TaxBracket>,
    contribution_rate: Decimal,
    standard_monthly_hours: Decimal,
    overtime_multiplier: Decimal,
}

impl PayrollConfig {
    /// Creates a new configuration, validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::ConfigurationError`] when:
    /// - the bracket table is empty or does not start at zero
    /// - a bracket does not start where the previous one ends (gap or overlap)
    /// - a bracket's `max` is not above its `min`
    /// - a bracket other than the last one is unbounded, or the last one is bounded
    /// - a rate or the contribution rate is outside `[0, 1]`
    /// - `standard_monthly_hours` is not positive
    /// - `overtime_multiplier` is negative
    pub fn new(
        tax_brackets: Vec<TaxBracket>,
        contribution_rate: Decimal,
        standard_monthly_hours: Decimal,
        overtime_multiplier: Decimal,
    ) -> PayrollResult<Self> {
        validate_brackets(&tax_brackets)?;

        if !is_fraction(contribution_rate) {
            return Err(PayrollError::configuration(format!(
                "contribution_rate {} must be between 0 and 1",
                contribution_rate
            )));
        }
        if standard_monthly_hours <= Decimal::ZERO {
            return Err(PayrollError::configuration(format!(
                "standard_monthly_hours {} must be positive",
                standard_monthly_hours
            )));
        }
        if overtime_multiplier < Decimal::ZERO {
            return Err(PayrollError::configuration(format!(
                "overtime_multiplier {} must not be negative",
                overtime_multiplier
            )));
        }

        Ok(Self {
            tax_brackets,
            contribution_rate,
            standard_monthly_hours,
            overtime_multiplier,
        })
    }

    /// Returns the tax brackets, ascending by `min`.
    pub fn tax_brackets(&self) -> &[TaxBracket] {
        &self.tax_brackets
    }

    /// Returns the social-security contribution rate.
    pub fn contribution_rate(&self) -> Decimal {
        self.contribution_rate
    }

    /// Returns the standard monthly hours.
    pub fn standard_monthly_hours(&self) -> Decimal {
        self.standard_monthly_hours
    }

    /// Returns the overtime multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_multiplier
    }
}

impl Default for PayrollConfig {
    /// The Tunisian IRPP table with CNSS at 9.18%, 173 hours and 125% overtime.
    fn default() -> Self {
        Self {
            tax_brackets: vec![
                TaxBracket::bounded(Decimal::ZERO, Decimal::new(5000, 0), Decimal::ZERO),
                TaxBracket::bounded(
                    Decimal::new(5000, 0),
                    Decimal::new(20000, 0),
                    Decimal::new(26, 2),
                ),
                TaxBracket::bounded(
                    Decimal::new(20000, 0),
                    Decimal::new(30000, 0),
                    Decimal::new(28, 2),
                ),
                TaxBracket::bounded(
                    Decimal::new(30000, 0),
                    Decimal::new(50000, 0),
                    Decimal::new(32, 2),
                ),
                TaxBracket::unbounded(Decimal::new(50000, 0), Decimal::new(35, 2)),
            ],
            contribution_rate: DEFAULT_CONTRIBUTION_RATE,
            standard_monthly_hours: DEFAULT_STANDARD_MONTHLY_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

fn validate_brackets(brackets: &[TaxBracket]) -> PayrollResult<()> {
    let first = brackets
        .first()
        .ok_or_else(|| PayrollError::configuration("tax_brackets must not be empty"))?;

    if first.min != Decimal::ZERO {
        return Err(PayrollError::configuration(format!(
            "first tax bracket must start at 0, found {}",
            first.min
        )));
    }

    let last_index = brackets.len() - 1;
    let mut expected_min = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.min != expected_min {
            let kind = if bracket.min > expected_min {
                "gap"
            } else {
                "overlap"
            };
            return Err(PayrollError::configuration(format!(
                "tax bracket {} starts at {} but the previous bracket ends at {} ({})",
                index, bracket.min, expected_min, kind
            )));
        }

        if !is_fraction(bracket.rate) {
            return Err(PayrollError::configuration(format!(
                "tax bracket {} rate {} must be between 0 and 1",
                index, bracket.rate
            )));
        }

        match (bracket.max, index == last_index) {
            (Some(max), false) => {
                if max <= bracket.min {
                    return Err(PayrollError::configuration(format!(
                        "tax bracket {} max {} must be greater than min {}",
                        index, max, bracket.min
                    )));
                }
                expected_min = max;
            }
            (None, false) => {
                return Err(PayrollError::configuration(format!(
                    "tax bracket {} is unbounded but is not the last bracket",
                    index
                )));
            }
            (Some(max), true) => {
                return Err(PayrollError::configuration(format!(
                    "last tax bracket must be unbounded, found max {}",
                    max
                )));
            }
            (None, true) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn two_brackets() -> Vec<TaxBracket> {
        vec![
            TaxBracket::bounded(dec("0"), dec("5000"), dec("0")),
            TaxBracket::unbounded(dec("5000"), dec("0.26")),
        ]
    }

    fn expect_configuration_error(result: PayrollResult<PayrollConfig>, needle: &str) {
        match result {
            Err(PayrollError::ConfigurationError { message }) => {
                assert!(
                    message.contains(needle),
                    "expected '{}' in '{}'",
                    needle,
                    message
                );
            }
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_passes_validation() {
        let default = PayrollConfig::default();
        let rebuilt = PayrollConfig::new(
            default.tax_brackets().to_vec(),
            default.contribution_rate(),
            default.standard_monthly_hours(),
            default.overtime_multiplier(),
        );
        assert_eq!(rebuilt.unwrap(), default);
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_CONTRIBUTION_RATE, dec("0.0918"));
        assert_eq!(DEFAULT_STANDARD_MONTHLY_HOURS, dec("173"));
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec("1.25"));
    }

    #[test]
    fn test_empty_brackets_rejected() {
        let result = PayrollConfig::new(vec![], dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "must not be empty");
    }

    #[test]
    fn test_first_bracket_must_start_at_zero() {
        let brackets = vec![TaxBracket::unbounded(dec("100"), dec("0.1"))];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "must start at 0");
    }

    #[test]
    fn test_gap_between_brackets_rejected() {
        let brackets = vec![
            TaxBracket::bounded(dec("0"), dec("5000"), dec("0")),
            TaxBracket::unbounded(dec("5001"), dec("0.26")),
        ];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "gap");
    }

    #[test]
    fn test_overlapping_brackets_rejected() {
        let brackets = vec![
            TaxBracket::bounded(dec("0"), dec("5000"), dec("0")),
            TaxBracket::unbounded(dec("4000"), dec("0.26")),
        ];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "overlap");
    }

    #[test]
    fn test_unsorted_brackets_rejected() {
        let brackets = vec![
            TaxBracket::bounded(dec("0"), dec("5000"), dec("0")),
            TaxBracket::bounded(dec("20000"), dec("30000"), dec("0.28")),
            TaxBracket::bounded(dec("5000"), dec("20000"), dec("0.26")),
            TaxBracket::unbounded(dec("30000"), dec("0.32")),
        ];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_bracket_span_rejected() {
        let brackets = vec![
            TaxBracket::bounded(dec("0"), dec("0"), dec("0")),
            TaxBracket::unbounded(dec("0"), dec("0.26")),
        ];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "must be greater than min");
    }

    #[test]
    fn test_unbounded_middle_bracket_rejected() {
        let brackets = vec![
            TaxBracket::unbounded(dec("0"), dec("0")),
            TaxBracket::unbounded(dec("5000"), dec("0.26")),
        ];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "is not the last bracket");
    }

    #[test]
    fn test_bounded_last_bracket_rejected() {
        let brackets = vec![TaxBracket::bounded(dec("0"), dec("5000"), dec("0"))];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "must be unbounded");
    }

    #[test]
    fn test_bracket_rate_above_one_rejected() {
        let brackets = vec![TaxBracket::unbounded(dec("0"), dec("26"))];
        let result = PayrollConfig::new(brackets, dec("0.0918"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "rate 26");
    }

    #[test]
    fn test_zero_standard_hours_rejected() {
        let result = PayrollConfig::new(two_brackets(), dec("0.0918"), dec("0"), dec("1.25"));
        expect_configuration_error(result, "standard_monthly_hours");
    }

    #[test]
    fn test_contribution_rate_out_of_range_rejected() {
        let result = PayrollConfig::new(two_brackets(), dec("9.18"), dec("173"), dec("1.25"));
        expect_configuration_error(result, "contribution_rate");
    }

    #[test]
    fn test_negative_overtime_multiplier_rejected() {
        let result = PayrollConfig::new(two_brackets(), dec("0.0918"), dec("173"), dec("-1"));
        expect_configuration_error(result, "overtime_multiplier");
    }

    #[test]
    fn test_config_file_converts_into_validated_config() {
        let file = PayrollConfigFile {
            tax_brackets: two_brackets(),
            contribution_rate: dec("0.1"),
            standard_monthly_hours: dec("160"),
            overtime_multiplier: dec("1.5"),
        };
        let config = PayrollConfig::try_from(file).unwrap();
        assert_eq!(config.tax_brackets().len(), 2);
        assert_eq!(config.standard_monthly_hours(), dec("160"));
    }
}
