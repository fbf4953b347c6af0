//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! [`PayrollConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads payroll settings from YAML.
///
/// Every field is optional in the file; missing fields take their defaults.
/// The loaded configuration is validated before it is returned.
///
/// # File Format
///
/// ```text
/// daily_wage: "610.00"
/// regular_hours: 8
/// workdays: 6
/// ```
///
/// # Example
///
/// ```no_run
/// use weekly_payroll::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./payroll.yaml")?;
/// println!("Daily wage: {}", config.daily_wage);
/// # Ok::<(), weekly_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a validated [`PayrollConfig`], or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown fields (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            PayrollError::ConfigParseError { message, .. } => PayrollError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(
            path = %path_str,
            daily_wage = %config.daily_wage,
            regular_hours = %config.regular_hours,
            workdays = config.workdays,
            "Loaded payroll configuration"
        );

        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    pub fn parse(content: &str) -> PayrollResult<PayrollConfig> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(PayrollConfig::default());
        }

        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }
}
