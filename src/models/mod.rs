//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod employee;
mod pay_period;
mod payroll_record;

pub use breakdown::{AuditStep, PayrollBreakdown};
pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payroll_record::{PayrollRecord, PayrollStatus};
