//! Payroll generation workflow.
//!
//! This module turns employees and their attended hours into payroll records
//! by calling the calculator once per employee. Records are returned to the
//! caller; nothing is persisted here.

mod generator;

pub use generator::{BatchFailure, BatchOutcome, PayrollGenerator, PayrollPreview};
