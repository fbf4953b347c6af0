//! Day categories for rest-day and holiday premiums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// The kind of public holiday falling on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Special non-working holiday.
    SpecialNonWorking,
    /// Regular holiday.
    Regular,
}

/// The pay category of a day.
///
/// Rest-day status is folded into the combined variants rather than carried as
/// a separate flag, so a day can never attract a rest-day premium and a
/// holiday premium independently.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::{DayCategory, HolidayKind};
///
/// let category: DayCategory = "rh_rest".parse().unwrap();
/// assert_eq!(category, DayCategory::RegularHolidayAndRestDay);
/// assert_eq!(
///     DayCategory::from_flags(true, Some(HolidayKind::Regular)),
///     category
/// );
/// assert!(category.is_rest_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// An ordinary working day.
    Normal,
    /// A scheduled rest day.
    RestDay,
    /// A special non-working holiday.
    SpecialNonWorkingHoliday,
    /// A special non-working holiday that is also a rest day.
    SpecialNonWorkingHolidayAndRestDay,
    /// A regular holiday.
    RegularHoliday,
    /// A regular holiday that is also a rest day.
    RegularHolidayAndRestDay,
}

impl DayCategory {
    /// All six categories, in rate-table order.
    pub const ALL: [DayCategory; 6] = [
        DayCategory::Normal,
        DayCategory::RestDay,
        DayCategory::SpecialNonWorkingHoliday,
        DayCategory::SpecialNonWorkingHolidayAndRestDay,
        DayCategory::RegularHoliday,
        DayCategory::RegularHolidayAndRestDay,
    ];

    /// Combines a rest-day flag and an optional holiday into one category.
    pub fn from_flags(rest_day: bool, holiday: Option<HolidayKind>) -> Self {
        match (holiday, rest_day) {
            (None, false) => DayCategory::Normal,
            (None, true) => DayCategory::RestDay,
            (Some(HolidayKind::SpecialNonWorking), false) => DayCategory::SpecialNonWorkingHoliday,
            (Some(HolidayKind::SpecialNonWorking), true) => {
                DayCategory::SpecialNonWorkingHolidayAndRestDay
            }
            (Some(HolidayKind::Regular), false) => DayCategory::RegularHoliday,
            (Some(HolidayKind::Regular), true) => DayCategory::RegularHolidayAndRestDay,
        }
    }

    /// Whether the category includes rest-day status.
    pub fn is_rest_day(&self) -> bool {
        matches!(
            self,
            DayCategory::RestDay
                | DayCategory::SpecialNonWorkingHolidayAndRestDay
                | DayCategory::RegularHolidayAndRestDay
        )
    }

    /// The holiday falling on the day, if any.
    pub fn holiday(&self) -> Option<HolidayKind> {
        match self {
            DayCategory::Normal | DayCategory::RestDay => None,
            DayCategory::SpecialNonWorkingHoliday
            | DayCategory::SpecialNonWorkingHolidayAndRestDay => {
                Some(HolidayKind::SpecialNonWorking)
            }
            DayCategory::RegularHoliday | DayCategory::RegularHolidayAndRestDay => {
                Some(HolidayKind::Regular)
            }
        }
    }

    /// The canonical snake_case token for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCategory::Normal => "normal",
            DayCategory::RestDay => "rest_day",
            DayCategory::SpecialNonWorkingHoliday => "special_non_working_holiday",
            DayCategory::SpecialNonWorkingHolidayAndRestDay => {
                "special_non_working_holiday_and_rest_day"
            }
            DayCategory::RegularHoliday => "regular_holiday",
            DayCategory::RegularHolidayAndRestDay => "regular_holiday_and_rest_day",
        }
    }

    /// A human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            DayCategory::Normal => "Normal Day",
            DayCategory::RestDay => "Rest Day",
            DayCategory::SpecialNonWorkingHoliday => "Special Non-Working Holiday",
            DayCategory::SpecialNonWorkingHolidayAndRestDay => {
                "Special Non-Working Holiday and Rest Day"
            }
            DayCategory::RegularHoliday => "Regular Holiday",
            DayCategory::RegularHolidayAndRestDay => "Regular Holiday and Rest Day",
        }
    }
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayCategory {
    type Err = PayrollError;

    /// Parses a category token.
    ///
    /// Matching is case-insensitive and treats spaces and dashes as underscores.
    /// Accepts the canonical names and the short codes `normal`, `rest`, `snwh`,
    /// `snwh_rest`/`snwhr`, `rh` and `rh_rest`/`rhr`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        let category = match normalized.as_str() {
            "normal" | "normal_day" => DayCategory::Normal,
            "rest" | "rest_day" => DayCategory::RestDay,
            "snwh" | "special_non_working_holiday" => DayCategory::SpecialNonWorkingHoliday,
            "snwhr" | "snwh_rest" | "special_non_working_holiday_and_rest_day" => {
                DayCategory::SpecialNonWorkingHolidayAndRestDay
            }
            "rh" | "regular_holiday" => DayCategory::RegularHoliday,
            "rhr" | "rh_rest" | "regular_holiday_and_rest_day" => {
                DayCategory::RegularHolidayAndRestDay
            }
            _ => {
                return Err(PayrollError::InvalidCategory {
                    token: s.to_string(),
                });
            }
        };

        Ok(category)
    }
}
