//! Calculation logic for the payroll engine.
//!
//! This module contains the payroll calculator and the pure functions it is
//! built from: monetary rounding, progressive income tax over a bracket table,
//! splitting attended hours into normal and overtime hours, and percentage
//! salary raises.

mod calculator;
mod hours;
mod income_tax;
mod rounding;
mod salary_raise;

pub use calculator::{AuditedPayroll, PayrollCalculator};
pub use hours::{HoursSplit, split_worked_hours};
pub use income_tax::{
    BracketPortion, IncomeTaxResult, calculate_annual_income_tax,
    calculate_annual_income_tax_detailed,
};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
pub use salary_raise::apply_percentage_raise;
