//! Minute-resolution clock times.
//!
//! Clock-in and clock-out values arrive from the operator as 4-digit 24-hour
//! strings (`"0900"`, `"2230"`). [`ClockTime`] is the validated form of such a
//! string and is what the calculation layer works with.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PayrollError, PayrollResult};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute resolution, in `[00:00, 23:59]`.
///
/// Only normalized input is accepted: exactly four ASCII digits, hour `00..=23`,
/// minute `00..=59`. Serializes to and from the same `HHMM` string.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::ClockTime;
///
/// let clock_out: ClockTime = "1930".parse().unwrap();
/// assert_eq!(clock_out.hour(), 19);
/// assert_eq!(clock_out.minute(), 30);
/// assert_eq!(clock_out.to_string(), "1930");
///
/// assert!("930".parse::<ClockTime>().is_err());
/// assert!("2400".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    minute_of_day: u16,
}

impl ClockTime {
    /// The clock value used for both clock-in and clock-out when no shift was worked.
    pub const NO_SHIFT_MARKER: ClockTime = ClockTime::from_hm_const(9, 0);

    /// Start of the night-shift window (22:00, inclusive).
    pub const NIGHT_START: ClockTime = ClockTime::from_hm_const(22, 0);

    /// End of the night-shift window (06:00, exclusive).
    pub const NIGHT_END: ClockTime = ClockTime::from_hm_const(6, 0);

    const fn from_hm_const(hour: u16, minute: u16) -> Self {
        Self {
            minute_of_day: hour * 60 + minute,
        }
    }

    /// Builds a clock time from an hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidTimeFormat`] if the hour is above 23 or the
    /// minute above 59.
    pub fn from_hm(hour: u32, minute: u32) -> PayrollResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(PayrollError::InvalidTimeFormat {
                input: format!("{:02}{:02}", hour, minute),
            });
        }
        Ok(Self::from_hm_const(hour as u16, minute as u16))
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    /// The hour component (0 to 23).
    pub fn hour(&self) -> u16 {
        self.minute_of_day / 60
    }

    /// The minute component (0 to 59).
    pub fn minute(&self) -> u16 {
        self.minute_of_day % 60
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::NO_SHIFT_MARKER
    }
}

impl From<NaiveTime> for ClockTime {
    /// Truncates seconds and sub-second precision.
    fn from(time: NaiveTime) -> Self {
        Self::from_hm_const(time.hour() as u16, time.minute() as u16)
    }
}

impl FromStr for ClockTime {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PayrollError::InvalidTimeFormat {
            input: s.to_string(),
        };

        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        NaiveTime::parse_from_str(s, "%H%M")
            .map(Self::from)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
