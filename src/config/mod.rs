//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the payroll configuration
//! (tax brackets, contribution rate, standard hours and overtime multiplier)
//! from a YAML file and validate it once, at startup.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Brackets: {}", loader.config().tax_brackets().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CONTRIBUTION_RATE, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_STANDARD_MONTHLY_HOURS,
    PayrollConfig, PayrollConfigFile, TaxBracket,
};
