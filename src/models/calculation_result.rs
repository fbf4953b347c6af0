//! Calculation result models for the payroll engine.
//!
//! This module contains the per-day [`DayResult`], the weekly [`WeeklySummary`]
//! and [`WeeklyResult`], and the [`AuditStep`] records that explain each figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayCategory;

/// How a day resolved after classification.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::{DayCategory, DayStatus};
///
/// assert!(DayStatus::Worked(DayCategory::Normal).is_present());
/// assert!(DayStatus::PaidRestDay.is_present());
/// assert!(!DayStatus::Absent.is_present());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "category", rename_all = "snake_case")]
pub enum DayStatus {
    /// A shift was worked; pay follows the category's premiums.
    Worked(DayCategory),
    /// No shift on a rest day; the daily wage is paid in full.
    PaidRestDay,
    /// No shift on a working day; nothing is paid.
    Absent,
}

impl DayStatus {
    /// Whether the day counts as present in the weekly summary.
    pub fn is_present(&self) -> bool {
        !matches!(self, DayStatus::Absent)
    }

    /// The pay category, for worked days.
    pub fn category(&self) -> Option<DayCategory> {
        match self {
            DayStatus::Worked(category) => Some(*category),
            DayStatus::PaidRestDay | DayStatus::Absent => None,
        }
    }
}

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number within the day.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The computed pay for one day.
///
/// `overtime_hours` always equals `day_overtime_hours + night_overtime_hours`,
/// and `night_shift_hours` never exceeds `worked_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// Position in the week, 1 to 7.
    pub day_index: u8,
    /// Whether the day is a scheduled rest slot.
    pub scheduled_rest_day: bool,
    /// How the day resolved.
    pub status: DayStatus,
    /// Total hours between clock-in and clock-out.
    pub worked_hours: Decimal,
    /// Worked hours up to the regular-hours threshold.
    pub regular_hours_worked: Decimal,
    /// Hours past the regular-hours threshold.
    pub overtime_hours: Decimal,
    /// Overtime hours outside the night window.
    pub day_overtime_hours: Decimal,
    /// Overtime hours inside the night window.
    pub night_overtime_hours: Decimal,
    /// All worked hours inside the night window.
    pub night_shift_hours: Decimal,
    /// Pay for regular hours, including any night differential.
    pub base_pay: Decimal,
    /// Whether the night differential was applied to base pay.
    pub night_differential_applied: bool,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Total pay for the day.
    pub day_pay: Decimal,
    /// The steps that produced these figures.
    pub audit_steps: Vec<AuditStep>,
}

impl DayResult {
    /// A day with no hours and the given pay, used for unworked days.
    pub(crate) fn unworked(
        day_index: u8,
        scheduled_rest_day: bool,
        status: DayStatus,
        day_pay: Decimal,
    ) -> Self {
        Self {
            day_index,
            scheduled_rest_day,
            status,
            worked_hours: Decimal::ZERO,
            regular_hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            day_overtime_hours: Decimal::ZERO,
            night_overtime_hours: Decimal::ZERO,
            night_shift_hours: Decimal::ZERO,
            base_pay: day_pay,
            night_differential_applied: false,
            overtime_pay: Decimal::ZERO,
            day_pay,
            audit_steps: Vec::new(),
        }
    }
}

/// Aggregated attendance and pay for a week.
///
/// # Example
///
/// ```
/// use weekly_payroll::models::WeeklySummary;
/// use rust_decimal::Decimal;
///
/// let summary = WeeklySummary::default();
/// assert_eq!(summary.total_pay, Decimal::ZERO);
/// assert_eq!(summary.days_present + summary.days_absent, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Sum of all day pay.
    pub total_pay: Decimal,
    /// Days worked or taken as paid rest.
    pub days_present: u32,
    /// Days with no shift and no paid rest.
    pub days_absent: u32,
    /// Rest-slot days on which a shift was worked.
    pub rest_days_present: u32,
    /// Rest-slot days with no shift, i.e. rest slots taken off.
    ///
    /// This counts attendance against the schedule, not pay: a rest slot
    /// taken off as paid rest is also counted in `days_present`. Together
    /// with `rest_days_present` it always adds up to the number of rest slots.
    pub rest_days_absent: u32,
    /// Total overtime hours, day and night.
    pub total_overtime_hours: Decimal,
    /// The part of `total_overtime_hours` inside the night window.
    pub total_night_overtime_hours: Decimal,
    /// Total hours worked.
    pub total_worked_hours: Decimal,
}

/// The complete payroll result for one employee's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyResult {
    /// The employee the week belongs to.
    pub employee_name: String,
    /// Per-day results, day 1 first.
    pub days: Vec<DayResult>,
    /// The weekly totals.
    pub summary: WeeklySummary,
}
