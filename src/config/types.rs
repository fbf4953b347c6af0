//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed [`PayrollConfig`] that is passed
//! explicitly into every calculation, optionally deserialized from YAML.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Default daily wage for a standard day.
pub const DEFAULT_DAILY_WAGE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Default number of regular hours before overtime applies.
pub const DEFAULT_REGULAR_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default number of working days at the start of the week.
pub const DEFAULT_WORKDAYS: u8 = 5;

/// Largest accepted daily wage.
pub const MAX_DAILY_WAGE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Number of days in a payroll week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Per-run payroll settings.
///
/// A value of this type is immutable once built and is handed to each
/// calculation call, so repeated runs can never leak state into each other.
/// Day indices greater than `workdays` are the scheduled rest-day slots.
///
/// # Example
///
/// ```
/// use weekly_payroll::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.daily_wage, Decimal::new(500, 0));
/// assert!(!config.is_rest_slot(5));
/// assert!(config.is_rest_slot(6));
/// assert!(config.is_rest_slot(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// Base wage for a standard day.
    pub daily_wage: Decimal,
    /// Hours past which additional time counts as overtime.
    pub regular_hours: Decimal,
    /// Number of working days at the start of the week.
    pub workdays: u8,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            daily_wage: DEFAULT_DAILY_WAGE,
            regular_hours: DEFAULT_REGULAR_HOURS,
            workdays: DEFAULT_WORKDAYS,
        }
    }
}

impl PayrollConfig {
    /// Checks every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> PayrollResult<()> {
        validate_wage_and_hours(self.daily_wage, self.regular_hours)?;

        if self.workdays > DAYS_PER_WEEK {
            return Err(PayrollError::InvalidConfig {
                field: "workdays".to_string(),
                message: format!("must be between 0 and {}", DAYS_PER_WEEK),
            });
        }

        Ok(())
    }

    /// Whether the given day index (1-based) is a scheduled rest day.
    pub fn is_rest_slot(&self, day_index: u8) -> bool {
        day_index > self.workdays
    }

    /// Number of scheduled rest days in the week.
    pub fn rest_days(&self) -> u8 {
        DAYS_PER_WEEK.saturating_sub(self.workdays)
    }
}

/// Validates a daily wage and regular-hours threshold pair.
pub(crate) fn validate_wage_and_hours(
    daily_wage: Decimal,
    regular_hours: Decimal,
) -> PayrollResult<()> {
    if daily_wage < Decimal::ZERO {
        return Err(PayrollError::InvalidConfig {
            field: "daily_wage".to_string(),
            message: format!("must not be negative, got {}", daily_wage),
        });
    }

    if daily_wage > MAX_DAILY_WAGE {
        return Err(PayrollError::InvalidConfig {
            field: "daily_wage".to_string(),
            message: format!("must not exceed {}, got {}", MAX_DAILY_WAGE, daily_wage),
        });
    }

    if regular_hours <= Decimal::ZERO {
        return Err(PayrollError::InvalidConfig {
            field: "regular_hours".to_string(),
            message: format!("must be greater than zero, got {}", regular_hours),
        });
    }

    // Clock times have minute resolution; a shorter threshold is meaningless
    if regular_hours * Decimal::from(60) < Decimal::ONE {
        return Err(PayrollError::InvalidConfig {
            field: "regular_hours".to_string(),
            message: format!("must be at least one minute, got {}", regular_hours),
        });
    }

    if regular_hours > Decimal::from(24) {
        return Err(PayrollError::InvalidConfig {
            field: "regular_hours".to_string(),
            message: format!("must not exceed 24, got {}", regular_hours),
        });
    }

    Ok(())
}
