//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading payroll
//! configuration, computing a payroll breakdown, or generating payroll records.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Configuration errors are raised once, when a [`PayrollConfig`] is built, and
/// prevent the calculator from ever being constructed. Argument errors are
/// returned synchronously to the immediate caller and are never retried.
///
/// [`PayrollConfig`]: crate::config::PayrollConfig
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    ConfigReadError {
        /// The path that could not be read.
        path: String,
        /// The underlying IO error.
        message: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configuration was parsed but is not usable: brackets overlap, have a
    /// gap, are unsorted, or the standard monthly hours are not positive.
    #[error("Invalid payroll configuration: {message}")]
    ConfigurationError {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// An input to a calculation was outside its documented domain.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// The employee has no base salary configured.
    #[error("Base salary is not configured for employee '{employee_id}'")]
    SalaryNotConfigured {
        /// The employee missing a base salary.
        employee_id: String,
    },

    /// A payroll record already exists for the employee and period.
    #[error("Payroll already exists for employee '{employee_id}' from {start_date} to {end_date}")]
    DuplicatePayroll {
        /// The employee the duplicate belongs to.
        employee_id: String,
        /// First day of the period.
        start_date: NaiveDate,
        /// Last day of the period.
        end_date: NaiveDate,
    },

    /// A pay period ends before it starts.
    #[error("Invalid pay period: {end_date} is before {start_date}")]
    InvalidPayPeriod {
        /// First day of the period.
        start_date: NaiveDate,
        /// Last day of the period.
        end_date: NaiveDate,
    },

    /// A payroll record was moved to a status it cannot reach from its current one.
    #[error("Cannot move payroll from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl PayrollError {
    /// Shorthand for an [`PayrollError::InvalidArgument`] about a negative value.
    pub(crate) fn negative(field: &str) -> Self {
        PayrollError::InvalidArgument {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        }
    }

    /// Shorthand for an [`PayrollError::InvalidArgument`] about a value whose
    /// arithmetic would overflow.
    pub(crate) fn too_large(field: &str) -> Self {
        PayrollError::InvalidArgument {
            field: field.to_string(),
            message: "amount too large".to_string(),
        }
    }

    /// Shorthand for a [`PayrollError::ConfigurationError`].
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        PayrollError::ConfigurationError {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
