//! Weekly payroll input model.

use serde::{Deserialize, Serialize};

use crate::config::{DAYS_PER_WEEK, PayrollConfig};
use crate::error::{PayrollError, PayrollResult};

use super::{ClockTime, DayCategory, DayRecord};

/// One employee's week: a name and exactly seven [`DayRecord`]s.
///
/// Day indices run 1 to 7 in order. The invariant is checked on construction
/// and on deserialization, and the days can only be edited through setters
/// that keep it.
///
/// # Example
///
/// ```
/// use weekly_payroll::config::PayrollConfig;
/// use weekly_payroll::models::{DayCategory, WeeklyPayroll};
///
/// let mut week = WeeklyPayroll::with_defaults("Juan dela Cruz", &PayrollConfig::default());
/// week.set_clock_out(1, "1900".parse().unwrap()).unwrap();
/// week.set_category(1, Some(DayCategory::RegularHoliday)).unwrap();
///
/// assert_eq!(week.days().len(), 7);
/// assert!(week.day(1).unwrap().has_shift());
/// assert!(week.set_clock_out(8, "1900".parse().unwrap()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedWeek")]
pub struct WeeklyPayroll {
    employee_name: String,
    days: Vec<DayRecord>,
}

#[derive(Deserialize)]
struct UncheckedWeek {
    employee_name: String,
    days: Vec<DayRecord>,
}

impl TryFrom<UncheckedWeek> for WeeklyPayroll {
    type Error = PayrollError;

    fn try_from(raw: UncheckedWeek) -> Result<Self, Self::Error> {
        WeeklyPayroll::new(raw.employee_name, raw.days)
    }
}

impl WeeklyPayroll {
    /// Creates a week from seven day records.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidWeek`] unless `days` holds exactly seven
    /// records whose indices are 1 to 7 in order.
    pub fn new(employee_name: impl Into<String>, days: Vec<DayRecord>) -> PayrollResult<Self> {
        if days.len() != DAYS_PER_WEEK as usize {
            return Err(PayrollError::InvalidWeek {
                message: format!("expected {} days, got {}", DAYS_PER_WEEK, days.len()),
            });
        }

        for (position, day) in days.iter().enumerate() {
            let expected = position as u8 + 1;
            if day.day_index != expected {
                return Err(PayrollError::InvalidWeek {
                    message: format!(
                        "day at position {} has index {}, expected {}",
                        expected, day.day_index, expected
                    ),
                });
            }
        }

        Ok(Self {
            employee_name: employee_name.into(),
            days,
        })
    }

    /// Creates a week of unworked days using the wage parameters from `config`.
    pub fn with_defaults(employee_name: impl Into<String>, config: &PayrollConfig) -> Self {
        Self {
            employee_name: employee_name.into(),
            days: (1..=DAYS_PER_WEEK)
                .map(|index| DayRecord::new(index, config))
                .collect(),
        }
    }

    /// The employee's name.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// Renames the employee.
    pub fn set_employee_name(&mut self, employee_name: impl Into<String>) {
        self.employee_name = employee_name.into();
    }

    /// The seven day records, in order.
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// The record for a day index (1-based).
    pub fn day(&self, day_index: u8) -> Option<&DayRecord> {
        day_index
            .checked_sub(1)
            .and_then(|position| self.days.get(position as usize))
    }

    fn day_mut(&mut self, day_index: u8) -> PayrollResult<&mut DayRecord> {
        day_index
            .checked_sub(1)
            .and_then(|position| self.days.get_mut(position as usize))
            .ok_or_else(|| PayrollError::InvalidWeek {
                message: format!("day index {} is outside 1..={}", day_index, DAYS_PER_WEEK),
            })
    }

    /// Sets the clock-in time of a day.
    pub fn set_clock_in(&mut self, day_index: u8, clock_in: ClockTime) -> PayrollResult<()> {
        self.day_mut(day_index)?.clock_in = clock_in;
        Ok(())
    }

    /// Sets the clock-out time of a day.
    pub fn set_clock_out(&mut self, day_index: u8, clock_out: ClockTime) -> PayrollResult<()> {
        self.day_mut(day_index)?.clock_out = clock_out;
        Ok(())
    }

    /// Sets or clears the explicit category of a day.
    pub fn set_category(
        &mut self,
        day_index: u8,
        category: Option<DayCategory>,
    ) -> PayrollResult<()> {
        self.day_mut(day_index)?.category = category;
        Ok(())
    }

    /// Applies the wage parameters of `config` to every day.
    pub fn apply_wage_settings(&mut self, config: &PayrollConfig) {
        for day in &mut self.days {
            day.daily_wage = config.daily_wage;
            day.regular_hours = config.regular_hours;
        }
    }
}
