//! Day record model.
//!
//! A [`DayRecord`] is the operator's configuration for one day of the week:
//! clock times, an optional explicit category, and the wage parameters in force.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DAILY_WAGE, DEFAULT_REGULAR_HOURS, PayrollConfig};

use super::{ClockTime, DayCategory};

fn default_daily_wage() -> Decimal {
    DEFAULT_DAILY_WAGE
}

fn default_regular_hours() -> Decimal {
    DEFAULT_REGULAR_HOURS
}

/// One calendar day's configuration.
///
/// A day whose clock-in and clock-out are both [`ClockTime::NO_SHIFT_MARKER`]
/// has no shift recorded. Any other equal pair is a 24-hour shift.
///
/// # Example
///
/// ```
/// use weekly_payroll::config::PayrollConfig;
/// use weekly_payroll::models::{DayCategory, DayRecord};
///
/// let config = PayrollConfig::default();
/// let unworked = DayRecord::new(3, &config);
/// assert!(!unworked.has_shift());
///
/// let worked = DayRecord::new(3, &config)
///     .with_shift("0900".parse().unwrap(), "1900".parse().unwrap())
///     .with_category(DayCategory::RegularHoliday);
/// assert!(worked.has_shift());
/// assert_eq!(worked.category, Some(DayCategory::RegularHoliday));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Position in the week, 1 to 7.
    pub day_index: u8,
    /// Clock-in time.
    #[serde(default)]
    pub clock_in: ClockTime,
    /// Clock-out time.
    #[serde(default)]
    pub clock_out: ClockTime,
    /// Explicit category chosen by the operator, if any.
    #[serde(default)]
    pub category: Option<DayCategory>,
    /// Base wage for a standard day.
    #[serde(default = "default_daily_wage")]
    pub daily_wage: Decimal,
    /// Hours past which additional time counts as overtime.
    #[serde(default = "default_regular_hours")]
    pub regular_hours: Decimal,
}

impl DayRecord {
    /// Creates an unworked day with the wage parameters from `config`.
    pub fn new(day_index: u8, config: &PayrollConfig) -> Self {
        Self {
            day_index,
            clock_in: ClockTime::NO_SHIFT_MARKER,
            clock_out: ClockTime::NO_SHIFT_MARKER,
            category: None,
            daily_wage: config.daily_wage,
            regular_hours: config.regular_hours,
        }
    }

    /// Sets the clock-in and clock-out times.
    pub fn with_shift(mut self, clock_in: ClockTime, clock_out: ClockTime) -> Self {
        self.clock_in = clock_in;
        self.clock_out = clock_out;
        self
    }

    /// Sets an explicit category.
    pub fn with_category(mut self, category: DayCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether a shift was recorded for the day.
    pub fn has_shift(&self) -> bool {
        self.clock_in != ClockTime::NO_SHIFT_MARKER || self.clock_out != ClockTime::NO_SHIFT_MARKER
    }
}
