//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod clock_time;
mod day_category;
mod day_record;
mod weekly_payroll;

pub use calculation_result::{AuditStep, DayResult, DayStatus, WeeklyResult, WeeklySummary};
pub use clock_time::{ClockTime, MINUTES_PER_DAY};
pub use day_category::{DayCategory, HolidayKind};
pub use day_record::DayRecord;
pub use weekly_payroll::WeeklyPayroll;
