//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollConfig, PayrollConfigFile};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads a single YAML file, validates it into a
/// [`PayrollConfig`], and keeps it for the lifetime of the process.
///
/// # File Format
///
/// ```text
/// tax_brackets:
///   - { min: 0, max: 5000, rate: 0.00 }
///   - { min: 5000, rate: 0.26 }
/// contribution_rate: 0.0918
/// standard_monthly_hours: 173
/// overtime_multiplier: 1.25
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Standard hours: {}", loader.config().standard_monthly_hours());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file exists but cannot be read (`ConfigReadError`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The parsed values are inconsistent (`ConfigurationError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PayrollError::ConfigNotFound {
                path: path_str.clone(),
            },
            kind => PayrollError::ConfigReadError {
                path: path_str.clone(),
                message: format!("{:?}: {}", kind, e),
            },
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            brackets = loader.config.tax_brackets().len(),
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Loads configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// tax_brackets:
    ///   - { min: 0, rate: 0.1 }
    /// contribution_rate: 0.05
    /// standard_monthly_hours: 160
    /// overtime_multiplier: 1.5
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.config().tax_brackets().len(), 1);
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Wraps the built-in Tunisian defaults.
    pub fn with_defaults() -> Self {
        Self {
            config: PayrollConfig::default(),
        }
    }

    fn parse(content: &str, path: &str) -> PayrollResult<Self> {
        let file: PayrollConfigFile =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let config = PayrollConfig::try_from(file)?;
        Ok(Self { config })
    }

    /// Returns the validated payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
