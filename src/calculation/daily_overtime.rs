//! Daily overtime detection functionality.
//!
//! This module provides functions for detecting when a shift exceeds the daily
//! regular-hours threshold, splitting the worked time into regular hours and
//! overtime, and splitting the overtime into its day and night portions.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::time_arithmetic::{ShiftSpan, minutes_to_hours, night_minutes};

/// The result of detecting daily overtime for a shift.
///
/// `overtime_hours == day_overtime_hours + night_overtime_hours` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// Total hours worked.
    pub worked_hours: Decimal,
    /// Hours up to the threshold.
    pub regular_hours_worked: Decimal,
    /// Hours exceeding the threshold (can be zero).
    pub overtime_hours: Decimal,
    /// Overtime hours outside the night window.
    pub day_overtime_hours: Decimal,
    /// Overtime hours inside the night window.
    pub night_overtime_hours: Decimal,
    /// Whether any regular (non-overtime) minute lies in the night window.
    pub regular_hours_in_night_window: bool,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Detects overtime for a shift and splits it into day and night portions.
///
/// Regular hours are the first `threshold` hours from clock-in; everything
/// after is overtime. Overtime minutes inside 22:00 to 06:00 are night
/// overtime, the remainder day overtime.
///
/// # Arguments
///
/// * `span` - The shift on the absolute minute line
/// * `threshold` - The regular-hours threshold (typically 8 hours per day)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ## Shift running past 22:00
///
/// ```
/// use weekly_payroll::calculation::{detect_daily_overtime, ShiftSpan, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let span = ShiftSpan::new("0900".parse().unwrap(), "0100".parse().unwrap());
/// let result = detect_daily_overtime(&span, DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
///
/// assert_eq!(result.overtime_hours, Decimal::from(8));
/// assert_eq!(result.day_overtime_hours, Decimal::from(5));
/// assert_eq!(result.night_overtime_hours, Decimal::from(3));
/// ```
///
/// ## Short shift (under threshold)
///
/// ```
/// use weekly_payroll::calculation::{detect_daily_overtime, ShiftSpan, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let span = ShiftSpan::new("0900".parse().unwrap(), "1500".parse().unwrap());
/// let result = detect_daily_overtime(&span, DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
///
/// assert_eq!(result.regular_hours_worked, Decimal::from(6));
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
pub fn detect_daily_overtime(
    span: &ShiftSpan,
    threshold: Decimal,
    step_number: u32,
) -> DailyOvertimeDetection {
    let worked_minutes = span.worked_minutes();
    let worked_hours = minutes_to_hours(worked_minutes);

    let regular_hours_worked = worked_hours.min(threshold);
    let overtime_hours = (worked_hours - threshold).max(Decimal::ZERO);

    // Where regular time ends on the minute line
    let threshold_minutes = (threshold * Decimal::from(60))
        .round()
        .to_i64()
        .unwrap_or(i64::MAX);
    let regular_end = span.start_minute() + worked_minutes.min(threshold_minutes);

    let night_overtime_hours = if overtime_hours > Decimal::ZERO {
        minutes_to_hours(night_minutes(regular_end, span.end_minute())).min(overtime_hours)
    } else {
        Decimal::ZERO
    };
    let day_overtime_hours = overtime_hours - night_overtime_hours;
    let regular_hours_in_night_window = night_minutes(span.start_minute(), regular_end) > 0;

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours ({} day, {} night)",
            worked_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize(),
            day_overtime_hours.normalize(),
            night_overtime_hours.normalize()
        )
    } else if worked_hours == threshold {
        format!(
            "{} hours worked equals {} hour threshold, no overtime triggered",
            worked_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour threshold, no overtime triggered",
            worked_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours_worked.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "day_overtime_hours": day_overtime_hours.normalize().to_string(),
            "night_overtime_hours": night_overtime_hours.normalize().to_string(),
            "regular_hours_in_night_window": regular_hours_in_night_window
        }),
        reasoning,
    };

    DailyOvertimeDetection {
        worked_hours,
        regular_hours_worked,
        overtime_hours,
        day_overtime_hours,
        night_overtime_hours,
        regular_hours_in_night_window,
        audit_step,
    }
}
