//! Calculation logic for the payroll engine.
//!
//! This module contains the clock arithmetic for shifts that cross midnight,
//! day classification, daily overtime detection with its day/night split,
//! daily pay composition, and weekly aggregation.

mod daily_overtime;
mod day_classifier;
mod pay_composer;
mod time_arithmetic;
mod weekly_aggregator;

pub use daily_overtime::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DailyOvertimeDetection, detect_daily_overtime,
};
pub use day_classifier::{DayClassification, classify_day};
pub use pay_composer::compute_day_pay;
pub use time_arithmetic::{
    ShiftSpan, is_night_shift, minutes_to_hours, night_minutes, worked_hours,
};
pub use weekly_aggregator::{aggregate, calculate_week};
