//! The fixed rate table for rest-day, holiday, overtime and night premiums.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::DayCategory;

/// Multiplier applied to base pay when regular hours fall in the night window.
pub const NIGHT_DIFFERENTIAL: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// Whether an overtime hour falls inside or outside the night window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPeriod {
    /// Outside 22:00 to 06:00.
    Day,
    /// Inside 22:00 to 06:00.
    Night,
}

/// The multipliers for one day category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRates {
    /// Multiplier on the daily wage for regular (non-overtime) hours.
    pub base: Decimal,
    /// Multiplier on the hourly rate for overtime outside the night window.
    pub overtime_day: Decimal,
    /// Multiplier on the hourly rate for overtime inside the night window.
    pub overtime_night: Decimal,
}

impl CategoryRates {
    const fn new(base: (u32, u32), overtime_day: (u32, u32), overtime_night: (u32, u32)) -> Self {
        Self {
            base: Decimal::from_parts(base.0, 0, 0, false, base.1),
            overtime_day: Decimal::from_parts(overtime_day.0, 0, 0, false, overtime_day.1),
            overtime_night: Decimal::from_parts(overtime_night.0, 0, 0, false, overtime_night.1),
        }
    }
}

/// An immutable mapping from [`DayCategory`] to its multipliers.
///
/// The table is a plain value with no interior mutability; [`RateTable::STANDARD`]
/// can be shared freely between calculations.
///
/// # Example
///
/// ```
/// use weekly_payroll::config::{RateTable, ShiftPeriod};
/// use weekly_payroll::models::DayCategory;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::STANDARD;
/// assert_eq!(
///     rates.base_multiplier(DayCategory::RegularHolidayAndRestDay),
///     Decimal::new(260, 2)
/// );
/// assert_eq!(
///     rates.overtime_multiplier(DayCategory::Normal, ShiftPeriod::Night),
///     Decimal::new(1375, 3)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateTable {
    normal: CategoryRates,
    rest_day: CategoryRates,
    special_non_working_holiday: CategoryRates,
    special_non_working_holiday_and_rest_day: CategoryRates,
    regular_holiday: CategoryRates,
    regular_holiday_and_rest_day: CategoryRates,
    night_differential: Decimal,
}

impl RateTable {
    /// The standard premiums.
    pub const STANDARD: RateTable = RateTable {
        normal: CategoryRates::new((100, 2), (125, 2), (1375, 3)),
        rest_day: CategoryRates::new((130, 2), (169, 2), (1859, 3)),
        special_non_working_holiday: CategoryRates::new((130, 2), (169, 2), (1859, 3)),
        special_non_working_holiday_and_rest_day: CategoryRates::new((150, 2), (195, 2), (2145, 3)),
        regular_holiday: CategoryRates::new((200, 2), (260, 2), (286, 2)),
        regular_holiday_and_rest_day: CategoryRates::new((260, 2), (338, 2), (3718, 3)),
        night_differential: NIGHT_DIFFERENTIAL,
    };

    /// Returns all multipliers for a category.
    pub fn rates(&self, category: DayCategory) -> &CategoryRates {
        match category {
            DayCategory::Normal => &self.normal,
            DayCategory::RestDay => &self.rest_day,
            DayCategory::SpecialNonWorkingHoliday => &self.special_non_working_holiday,
            DayCategory::SpecialNonWorkingHolidayAndRestDay => {
                &self.special_non_working_holiday_and_rest_day
            }
            DayCategory::RegularHoliday => &self.regular_holiday,
            DayCategory::RegularHolidayAndRestDay => &self.regular_holiday_and_rest_day,
        }
    }

    /// Multiplier on the daily wage for the category's regular hours.
    pub fn base_multiplier(&self, category: DayCategory) -> Decimal {
        self.rates(category).base
    }

    /// Multiplier on the hourly rate for an overtime hour of the category.
    pub fn overtime_multiplier(&self, category: DayCategory, period: ShiftPeriod) -> Decimal {
        let rates = self.rates(category);
        match period {
            ShiftPeriod::Day => rates.overtime_day,
            ShiftPeriod::Night => rates.overtime_night,
        }
    }

    /// Multiplier on base pay when regular hours touch the night window.
    pub fn night_differential(&self) -> Decimal {
        self.night_differential
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
