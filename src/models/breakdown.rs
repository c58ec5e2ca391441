//! Payroll breakdown models.
//!
//! This module contains the [`PayrollBreakdown`] value object produced by every
//! payroll calculation, and the [`AuditStep`] type used to explain one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full result of one payroll calculation.
///
/// Every monetary field is rounded to two decimal places. A breakdown has no
/// identity of its own: it is either shown directly (a simulation) or copied
/// into a [`PayrollRecord`](super::PayrollRecord).
///
/// The following always hold exactly:
/// - `net_salary == gross_salary - total_deductions`
/// - `total_deductions == social_contribution + monthly_tax`
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::default();
/// let breakdown = calculator.calculate_payroll(Decimal::new(1000, 0), Decimal::ZERO)?;
///
/// assert_eq!(breakdown.gross_salary, Decimal::new(100000, 2));
/// assert_eq!(breakdown.social_contribution, Decimal::new(9180, 2));
/// assert_eq!(breakdown.net_salary, Decimal::new(78040, 2));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Base salary plus overtime pay.
    pub gross_salary: Decimal,
    /// Base salary divided by the standard monthly hours.
    pub hourly_rate: Decimal,
    /// Overtime hours, as supplied.
    pub overtime_hours: Decimal,
    /// Overtime hours × hourly rate × overtime multiplier.
    pub overtime_pay: Decimal,
    /// Employee social-security contribution on the gross salary.
    pub social_contribution: Decimal,
    /// The contribution rate as a percentage, for display.
    pub contribution_rate_percent: Decimal,
    /// (Gross − contribution) × 12.
    pub annual_taxable_income: Decimal,
    /// Progressive income tax on the annual taxable income.
    pub annual_tax: Decimal,
    /// Annual tax divided by 12.
    pub monthly_tax: Decimal,
    /// Contribution plus monthly tax.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
}

impl PayrollBreakdown {
    /// Returns true when the deduction and net salary identities hold.
    pub fn is_balanced(&self) -> bool {
        self.total_deductions == self.social_contribution + self.monthly_tax
            && self.net_salary == self.gross_salary - self.total_deductions
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// payroll pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
