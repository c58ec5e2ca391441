//! The payroll calculator.
//!
//! This module provides [`PayrollCalculator`], which turns a monthly base
//! salary and a number of overtime hours into a full [`PayrollBreakdown`]:
//! gross pay, social-security contribution, progressive income tax and net pay.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, PayrollBreakdown};

use super::hours::{HoursSplit, split_worked_hours};
use super::income_tax::{
    IncomeTaxResult, calculate_annual_income_tax, calculate_annual_income_tax_detailed,
};
use super::rounding::round_money;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A payroll breakdown together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedPayroll {
    /// The computed breakdown, identical to [`PayrollCalculator::calculate_payroll`].
    pub breakdown: PayrollBreakdown,
    /// The per-bracket income tax detail.
    pub income_tax: IncomeTaxResult,
    /// One step per stage of the calculation, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes payroll breakdowns over an immutable [`PayrollConfig`].
///
/// The calculator holds no mutable state; cloning it only bumps a reference
/// count, and it can be shared across threads freely.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::new(PayrollConfig::default());
/// let breakdown = calculator.calculate_payroll(Decimal::new(1730, 0), Decimal::new(10, 0))?;
///
/// assert_eq!(breakdown.hourly_rate, Decimal::new(1000, 2));
/// assert_eq!(breakdown.overtime_pay, Decimal::new(12500, 2));
/// assert_eq!(breakdown.gross_salary, Decimal::new(185500, 2));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    config: Arc<PayrollConfig>,
}

impl Default for PayrollCalculator {
    fn default() -> Self {
        Self::new(PayrollConfig::default())
    }
}

impl PayrollCalculator {
    /// Creates a calculator over the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a calculator sharing an already loaded configuration.
    pub fn from_shared(config: Arc<PayrollConfig>) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns `round(base_salary / standard_monthly_hours, 2)`.
    pub fn calculate_hourly_rate(&self, base_salary: Decimal) -> PayrollResult<Decimal> {
        ensure_non_negative("base_salary", base_salary)?;
        Ok(round_money(
            base_salary / self.config.standard_monthly_hours(),
        ))
    }

    /// Returns `round(gross_salary × contribution_rate, 2)`.
    pub fn calculate_contribution(&self, gross_salary: Decimal) -> PayrollResult<Decimal> {
        ensure_non_negative("gross_salary", gross_salary)?;
        Ok(round_money(gross_salary * self.config.contribution_rate()))
    }

    /// Returns the progressive annual income tax on `annual_taxable_income`.
    ///
    /// Income at or below zero yields zero.
    pub fn calculate_annual_income_tax(&self, annual_taxable_income: Decimal) -> Decimal {
        calculate_annual_income_tax(annual_taxable_income, self.config.tax_brackets())
    }

    /// Returns the annual income tax with one entry per bracket reached.
    pub fn calculate_annual_income_tax_detailed(
        &self,
        annual_taxable_income: Decimal,
    ) -> IncomeTaxResult {
        calculate_annual_income_tax_detailed(annual_taxable_income, self.config.tax_brackets())
    }

    /// Splits attended hours at the configured standard monthly hours.
    pub fn split_worked_hours(&self, worked_hours: Decimal) -> PayrollResult<HoursSplit> {
        split_worked_hours(worked_hours, self.config.standard_monthly_hours())
    }

    /// Computes the full payroll breakdown.
    ///
    /// Stages run in a fixed order and each result is rounded to two decimal
    /// places before feeding the next one:
    ///
    /// 1. hourly rate
    /// 2. overtime pay
    /// 3. gross salary
    /// 4. social contribution
    /// 5. annual taxable income
    /// 6. annual tax
    /// 7. monthly tax
    /// 8. total deductions
    /// 9. net salary
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidArgument`] if either input is negative, or
    /// so large that an intermediate amount no longer fits in a `Decimal`.
    pub fn calculate_payroll(
        &self,
        base_salary: Decimal,
        overtime_hours: Decimal,
    ) -> PayrollResult<PayrollBreakdown> {
        ensure_non_negative("overtime_hours", overtime_hours)?;

        let hourly_rate = self.calculate_hourly_rate(base_salary)?;
        let overtime_pay = round_money(checked(
            "overtime_hours",
            overtime_hours
                .checked_mul(hourly_rate)
                .and_then(|pay| pay.checked_mul(self.config.overtime_multiplier())),
        )?);
        let gross_salary = round_money(checked(
            "base_salary",
            base_salary.checked_add(overtime_pay),
        )?);
        let social_contribution = self.calculate_contribution(gross_salary)?;
        let annual_taxable_income = round_money(checked(
            "base_salary",
            (gross_salary - social_contribution).checked_mul(MONTHS_PER_YEAR),
        )?);
        let annual_tax = self.calculate_annual_income_tax(annual_taxable_income);
        let monthly_tax = round_money(annual_tax / MONTHS_PER_YEAR);
        let total_deductions = round_money(social_contribution + monthly_tax);
        let net_salary = round_money(gross_salary - total_deductions);

        debug!(
            base_salary = %base_salary,
            overtime_hours = %overtime_hours,
            gross_salary = %gross_salary,
            net_salary = %net_salary,
            "Calculated payroll"
        );

        Ok(PayrollBreakdown {
            gross_salary,
            hourly_rate,
            overtime_hours,
            overtime_pay,
            social_contribution,
            contribution_rate_percent: round_money(
                self.config.contribution_rate() * ONE_HUNDRED,
            ),
            annual_taxable_income,
            annual_tax,
            monthly_tax,
            total_deductions,
            net_salary,
        })
    }

    /// Previews a payroll without any side effect.
    ///
    /// Always returns exactly what [`calculate_payroll`](Self::calculate_payroll)
    /// returns for the same inputs.
    pub fn simulate(
        &self,
        base_salary: Decimal,
        overtime_hours: Decimal,
    ) -> PayrollResult<PayrollBreakdown> {
        self.calculate_payroll(base_salary, overtime_hours)
    }

    /// Computes the payroll breakdown and explains every stage.
    pub fn calculate_payroll_audited(
        &self,
        base_salary: Decimal,
        overtime_hours: Decimal,
    ) -> PayrollResult<AuditedPayroll> {
        let breakdown = self.calculate_payroll(base_salary, overtime_hours)?;
        let income_tax = self.calculate_annual_income_tax_detailed(breakdown.annual_taxable_income);
        let audit_steps = self.audit_steps(base_salary, &breakdown, &income_tax);

        Ok(AuditedPayroll {
            breakdown,
            income_tax,
            audit_steps,
        })
    }

    fn audit_steps(
        &self,
        base_salary: Decimal,
        b: &PayrollBreakdown,
        income_tax: &IncomeTaxResult,
    ) -> Vec<AuditStep> {
        let config = &self.config;
        let brackets: Vec<serde_json::Value> = income_tax
            .portions
            .iter()
            .map(|p| {
                serde_json::json!({
                    "min": p.min.to_string(),
                    "max": p.max.map(|m| m.to_string()),
                    "rate": p.rate.to_string(),
                    "taxable_amount": p.taxable_amount.to_string(),
                    "tax": p.tax.to_string()
                })
            })
            .collect();

        let steps = [
            (
                "hourly_rate",
                "Hourly Rate",
                serde_json::json!({
                    "base_salary": base_salary.to_string(),
                    "standard_monthly_hours": config.standard_monthly_hours().to_string()
                }),
                serde_json::json!({ "hourly_rate": b.hourly_rate.to_string() }),
                format!(
                    "{} / {} hours = {}",
                    base_salary.normalize(),
                    config.standard_monthly_hours().normalize(),
                    b.hourly_rate
                ),
            ),
            (
                "overtime_pay",
                "Overtime Pay",
                serde_json::json!({
                    "overtime_hours": b.overtime_hours.to_string(),
                    "hourly_rate": b.hourly_rate.to_string(),
                    "overtime_multiplier": config.overtime_multiplier().to_string()
                }),
                serde_json::json!({ "overtime_pay": b.overtime_pay.to_string() }),
                format!(
                    "{} hours × {} × {} = {}",
                    b.overtime_hours.normalize(),
                    b.hourly_rate,
                    config.overtime_multiplier().normalize(),
                    b.overtime_pay
                ),
            ),
            (
                "gross_salary",
                "Gross Salary",
                serde_json::json!({
                    "base_salary": base_salary.to_string(),
                    "overtime_pay": b.overtime_pay.to_string()
                }),
                serde_json::json!({ "gross_salary": b.gross_salary.to_string() }),
                format!(
                    "{} + {} = {}",
                    base_salary.normalize(),
                    b.overtime_pay,
                    b.gross_salary
                ),
            ),
            (
                "social_contribution",
                "Social Contribution",
                serde_json::json!({
                    "gross_salary": b.gross_salary.to_string(),
                    "contribution_rate": config.contribution_rate().to_string()
                }),
                serde_json::json!({ "social_contribution": b.social_contribution.to_string() }),
                format!(
                    "{} × {}% = {}",
                    b.gross_salary, b.contribution_rate_percent, b.social_contribution
                ),
            ),
            (
                "annual_taxable_income",
                "Annual Taxable Income",
                serde_json::json!({
                    "gross_salary": b.gross_salary.to_string(),
                    "social_contribution": b.social_contribution.to_string()
                }),
                serde_json::json!({ "annual_taxable_income": b.annual_taxable_income.to_string() }),
                format!(
                    "({} - {}) × 12 = {}",
                    b.gross_salary, b.social_contribution, b.annual_taxable_income
                ),
            ),
            (
                "annual_income_tax",
                "Annual Income Tax",
                serde_json::json!({ "annual_taxable_income": b.annual_taxable_income.to_string() }),
                serde_json::json!({
                    "annual_tax": b.annual_tax.to_string(),
                    "brackets": brackets
                }),
                format!(
                    "{} taxed across {} bracket(s) = {}",
                    b.annual_taxable_income,
                    income_tax.portions.len(),
                    b.annual_tax
                ),
            ),
            (
                "monthly_tax",
                "Monthly Tax",
                serde_json::json!({ "annual_tax": b.annual_tax.to_string() }),
                serde_json::json!({ "monthly_tax": b.monthly_tax.to_string() }),
                format!("{} / 12 = {}", b.annual_tax, b.monthly_tax),
            ),
            (
                "total_deductions",
                "Total Deductions",
                serde_json::json!({
                    "social_contribution": b.social_contribution.to_string(),
                    "monthly_tax": b.monthly_tax.to_string()
                }),
                serde_json::json!({ "total_deductions": b.total_deductions.to_string() }),
                format!(
                    "{} + {} = {}",
                    b.social_contribution, b.monthly_tax, b.total_deductions
                ),
            ),
            (
                "net_salary",
                "Net Salary",
                serde_json::json!({
                    "gross_salary": b.gross_salary.to_string(),
                    "total_deductions": b.total_deductions.to_string()
                }),
                serde_json::json!({ "net_salary": b.net_salary.to_string() }),
                format!(
                    "{} - {} = {}",
                    b.gross_salary, b.total_deductions, b.net_salary
                ),
            ),
        ];

        steps
            .into_iter()
            .zip(1u32..)
            .map(
                |((rule_id, rule_name, input, output, reasoning), step_number)| AuditStep {
                    step_number,
                    rule_id: rule_id.to_string(),
                    rule_name: rule_name.to_string(),
                    input,
                    output,
                    reasoning,
                },
            )
            .collect()
    }
}

fn checked(field: &str, value: Option<Decimal>) -> PayrollResult<Decimal> {
    value.ok_or_else(|| PayrollError::too_large(field))
}

fn ensure_non_negative(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::negative(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calculator() -> PayrollCalculator {
        PayrollCalculator::default()
    }

    #[test]
    fn test_hourly_rate() {
        assert_eq!(calculator().calculate_hourly_rate(dec("1730")).unwrap(), dec("10.00"));
        assert_eq!(calculator().calculate_hourly_rate(dec("1000")).unwrap(), dec("5.78"));
    }

    #[test]
    fn test_contribution() {
        assert_eq!(calculator().calculate_contribution(dec("1000")).unwrap(), dec("91.80"));
    }

    #[test]
    fn test_negative_base_salary_rejected() {
        match calculator().calculate_payroll(dec("-1"), Decimal::ZERO) {
            Err(PayrollError::InvalidArgument { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert!(calculator().calculate_hourly_rate(dec("-1")).is_err());
    }

    #[test]
    fn test_negative_overtime_rejected() {
        match calculator().calculate_payroll(dec("1000"), dec("-0.5")) {
            Err(PayrollError::InvalidArgument { field, .. }) => assert_eq!(field, "overtime_hours"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_overtime_hours_rejected_without_panicking() {
        let huge = dec("10000000000000000000000000000");
        match calculator().calculate_payroll(dec("1730"), huge) {
            Err(PayrollError::InvalidArgument { field, message }) => {
                assert_eq!(field, "overtime_hours");
                assert_eq!(message, "amount too large");
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_base_salary_rejected_without_panicking() {
        let huge = dec("10000000000000000000000000000");
        match calculator().calculate_payroll(huge, Decimal::ZERO) {
            Err(PayrollError::InvalidArgument { field, message }) => {
                assert_eq!(field, "base_salary");
                assert_eq!(message, "amount too large");
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
        assert!(calculator().simulate(Decimal::MAX, Decimal::MAX).is_err());
    }

    #[test]
    fn test_payroll_without_overtime() {
        let b = calculator().calculate_payroll(dec("1000"), Decimal::ZERO).unwrap();

        assert_eq!(b.gross_salary, dec("1000.00"));
        assert_eq!(b.hourly_rate, dec("5.78"));
        assert_eq!(b.overtime_pay, dec("0.00"));
        assert_eq!(b.social_contribution, dec("91.80"));
        assert_eq!(b.annual_taxable_income, dec("10898.40"));
        assert_eq!(b.annual_tax, dec("1533.58"));
        assert_eq!(b.monthly_tax, dec("127.80"));
        assert_eq!(b.total_deductions, dec("219.60"));
        assert_eq!(b.net_salary, dec("780.40"));
        assert_eq!(b.contribution_rate_percent, dec("9.18"));
    }

    #[test]
    fn test_payroll_with_overtime() {
        let b = calculator().calculate_payroll(dec("1730"), dec("10")).unwrap();

        assert_eq!(b.hourly_rate, dec("10.00"));
        assert_eq!(b.overtime_hours, dec("10"));
        assert_eq!(b.overtime_pay, dec("125.00"));
        assert_eq!(b.gross_salary, dec("1855.00"));
        assert_eq!(b.social_contribution, dec("170.29"));
        assert_eq!(b.annual_taxable_income, dec("20216.52"));
        assert_eq!(b.annual_tax, dec("3960.63"));
        assert_eq!(b.monthly_tax, dec("330.05"));
        assert_eq!(b.net_salary, dec("1354.66"));
        assert!(b.is_balanced());
    }

    #[test]
    fn test_zero_salary_gives_zero_breakdown() {
        let b = calculator().calculate_payroll(Decimal::ZERO, Decimal::ZERO).unwrap();

        assert_eq!(b.gross_salary, Decimal::ZERO);
        assert_eq!(b.net_salary, Decimal::ZERO);
        assert_eq!(b.social_contribution, Decimal::ZERO);
        assert_eq!(b.monthly_tax, Decimal::ZERO);
        assert_eq!(b.annual_tax, Decimal::ZERO);
    }

    #[test]
    fn test_high_salary_reaches_top_bracket() {
        let b = calculator().calculate_payroll(dec("5000"), Decimal::ZERO).unwrap();

        assert_eq!(b.social_contribution, dec("459.00"));
        assert_eq!(b.annual_taxable_income, dec("54492.00"));
        assert_eq!(b.annual_tax, dec("14672.20"));
        assert_eq!(b.monthly_tax, dec("1222.68"));
        assert_eq!(b.net_salary, dec("3318.32"));
    }

    #[test]
    fn test_simulate_matches_calculate() {
        let c = calculator();
        assert_eq!(
            c.simulate(dec("1500"), dec("5")).unwrap(),
            c.calculate_payroll(dec("1500"), dec("5")).unwrap()
        );
    }

    #[test]
    fn test_custom_configuration_is_used() {
        let config = PayrollConfig::new(
            vec![
                TaxBracket::bounded(dec("0"), dec("10000"), dec("0.10")),
                TaxBracket::unbounded(dec("10000"), dec("0.20")),
            ],
            dec("0.05"),
            dec("160"),
            dec("1.5"),
        )
        .unwrap();
        let b = PayrollCalculator::new(config)
            .calculate_payroll(dec("1600"), dec("4"))
            .unwrap();

        assert_eq!(b.hourly_rate, dec("10.00"));
        assert_eq!(b.overtime_pay, dec("60.00"));
        assert_eq!(b.gross_salary, dec("1660.00"));
        assert_eq!(b.social_contribution, dec("83.00"));
        // 1577 × 12 = 18924; 1000 + 8924 × 20% = 2784.80
        assert_eq!(b.annual_taxable_income, dec("18924.00"));
        assert_eq!(b.annual_tax, dec("2784.80"));
        assert_eq!(b.monthly_tax, dec("232.07"));
        assert!(b.is_balanced());
    }

    #[test]
    fn test_audited_breakdown_matches_plain() {
        let c = calculator();
        let audited = c.calculate_payroll_audited(dec("1730"), dec("10")).unwrap();

        assert_eq!(
            audited.breakdown,
            c.calculate_payroll(dec("1730"), dec("10")).unwrap()
        );
        assert_eq!(audited.audit_steps.len(), 9);
        assert_eq!(audited.income_tax.annual_tax, audited.breakdown.annual_tax);
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let audited = calculator()
            .calculate_payroll_audited(dec("1000"), Decimal::ZERO)
            .unwrap();

        let numbers: Vec<u32> = audited.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<u32>>());
        assert_eq!(audited.audit_steps[0].rule_id, "hourly_rate");
        assert_eq!(audited.audit_steps[8].rule_id, "net_salary");
        assert_eq!(audited.audit_steps[8].output["net_salary"], "780.40");
        assert!(audited.audit_steps[3].reasoning.contains("9.18%"));
    }

    #[test]
    fn test_audit_tax_step_lists_brackets() {
        let audited = calculator()
            .calculate_payroll_audited(dec("1000"), Decimal::ZERO)
            .unwrap();

        let tax_step = &audited.audit_steps[5];
        assert_eq!(tax_step.rule_id, "annual_income_tax");
        let brackets = tax_step.output["brackets"].as_array().unwrap();
        assert_eq!(brackets.len(), 2);
        assert_eq!(brackets[1]["taxable_amount"], "5898.40");
    }

    #[test]
    fn test_split_worked_hours_uses_config() {
        let split = calculator().split_worked_hours(dec("190")).unwrap();
        assert_eq!(split.normal_hours, dec("173"));
        assert_eq!(split.overtime_hours, dec("17"));
    }

    #[test]
    fn test_calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PayrollCalculator>();
    }
}
