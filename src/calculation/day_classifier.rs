//! Day classification.
//!
//! Decides whether a day was worked, taken as a paid rest day, or missed, and
//! which pay category applies to a worked day.

use tracing::debug;

use crate::config::PayrollConfig;
use crate::models::{AuditStep, DayCategory, DayRecord, DayStatus};

/// The result of classifying a day, with the audit step documenting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClassification {
    /// How the day resolved.
    pub status: DayStatus,
    /// Whether the day index is a scheduled rest slot.
    pub scheduled_rest_day: bool,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies a day from its record and the week's schedule.
///
/// - No shift recorded (both times at the `0900` marker): a paid rest day when the explicit category includes
///   rest-day status, or when no category was chosen and the day is a rest
///   slot; otherwise absent.
/// - Shift recorded: the explicit category if given, else `RestDay` on rest
///   slots and `Normal` elsewhere.
///
/// # Examples
///
/// ```
/// use weekly_payroll::calculation::classify_day;
/// use weekly_payroll::config::PayrollConfig;
/// use weekly_payroll::models::{DayCategory, DayRecord, DayStatus};
///
/// let config = PayrollConfig::default();
///
/// let weekday = DayRecord::new(2, &config);
/// assert_eq!(classify_day(&weekday, &config, 1).status, DayStatus::Absent);
///
/// let sunday = DayRecord::new(7, &config);
/// assert_eq!(classify_day(&sunday, &config, 1).status, DayStatus::PaidRestDay);
///
/// let worked_saturday = DayRecord::new(6, &config)
///     .with_shift("0900".parse().unwrap(), "1700".parse().unwrap());
/// assert_eq!(
///     classify_day(&worked_saturday, &config, 1).status,
///     DayStatus::Worked(DayCategory::RestDay)
/// );
/// ```
pub fn classify_day(
    record: &DayRecord,
    config: &PayrollConfig,
    step_number: u32,
) -> DayClassification {
    let scheduled_rest_day = config.is_rest_slot(record.day_index);
    let has_shift = record.has_shift();

    let (status, reasoning) = match (has_shift, record.category) {
        (false, Some(category)) if category.is_rest_day() => (
            DayStatus::PaidRestDay,
            format!("No shift on a day marked '{}': paid rest day", category),
        ),
        (false, Some(category)) => (
            DayStatus::Absent,
            format!("No shift on a day marked '{}': absent", category),
        ),
        (false, None) if scheduled_rest_day => (
            DayStatus::PaidRestDay,
            format!(
                "No shift on day {}, a scheduled rest day: paid rest day",
                record.day_index
            ),
        ),
        (false, None) => (
            DayStatus::Absent,
            format!("No shift on day {}, a working day: absent", record.day_index),
        ),
        (true, Some(category)) => (
            DayStatus::Worked(category),
            format!("Shift worked on a day marked '{}'", category),
        ),
        (true, None) => {
            let category = DayCategory::from_flags(scheduled_rest_day, None);
            (
                DayStatus::Worked(category),
                format!(
                    "Shift worked on day {} with no explicit category: '{}' by schedule",
                    record.day_index, category
                ),
            )
        }
    };

    if status == DayStatus::Absent {
        debug!(day_index = record.day_index, "Day classified as absent");
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_classification".to_string(),
        rule_name: "Day Classification".to_string(),
        input: serde_json::json!({
            "day_index": record.day_index,
            "clock_in": record.clock_in.to_string(),
            "clock_out": record.clock_out.to_string(),
            "category": record.category.map(|c| c.as_str()),
            "scheduled_rest_day": scheduled_rest_day
        }),
        output: serde_json::to_value(status).unwrap_or(serde_json::Value::Null),
        reasoning,
    };

    DayClassification {
        status,
        scheduled_rest_day,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockTime;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn config() -> PayrollConfig {
        PayrollConfig::default()
    }

    #[test]
    fn test_unworked_weekday_is_absent() {
        let config = config();
        for day in 1..=5 {
            let record = DayRecord::new(day, &config);
            assert_eq!(classify_day(&record, &config, 1).status, DayStatus::Absent);
        }
    }

    #[test]
    fn test_unworked_rest_slot_is_paid_rest() {
        let config = config();
        for day in 6..=7 {
            let record = DayRecord::new(day, &config);
            let result = classify_day(&record, &config, 1);
            assert_eq!(result.status, DayStatus::PaidRestDay);
            assert!(result.scheduled_rest_day);
        }
    }

    #[test]
    fn test_configured_rest_slots() {
        let config = PayrollConfig {
            workdays: 6,
            ..PayrollConfig::default()
        };
        let saturday = DayRecord::new(6, &config);
        assert_eq!(classify_day(&saturday, &config, 1).status, DayStatus::Absent);

        let sunday = DayRecord::new(7, &config);
        assert_eq!(
            classify_day(&sunday, &config, 1).status,
            DayStatus::PaidRestDay
        );
    }

    #[test]
    fn test_worked_day_without_category_uses_schedule() {
        let config = config();
        let weekday = DayRecord::new(3, &config).with_shift(t("0900"), t("1700"));
        assert_eq!(
            classify_day(&weekday, &config, 1).status,
            DayStatus::Worked(DayCategory::Normal)
        );

        let rest = DayRecord::new(7, &config).with_shift(t("0900"), t("1700"));
        assert_eq!(
            classify_day(&rest, &config, 1).status,
            DayStatus::Worked(DayCategory::RestDay)
        );
    }

    #[test]
    fn test_equal_times_off_the_marker_are_worked() {
        let config = config();
        let record = DayRecord::new(2, &config).with_shift(t("2200"), t("2200"));
        assert_eq!(
            classify_day(&record, &config, 1).status,
            DayStatus::Worked(DayCategory::Normal)
        );
    }

    #[test]
    fn test_explicit_category_wins_for_worked_day() {
        let config = config();
        let record = DayRecord::new(7, &config)
            .with_shift(t("0900"), t("1700"))
            .with_category(DayCategory::Normal);
        assert_eq!(
            classify_day(&record, &config, 1).status,
            DayStatus::Worked(DayCategory::Normal)
        );

        let holiday = DayRecord::new(2, &config)
            .with_shift(t("0900"), t("1700"))
            .with_category(DayCategory::RegularHoliday);
        assert_eq!(
            classify_day(&holiday, &config, 1).status,
            DayStatus::Worked(DayCategory::RegularHoliday)
        );
    }

    #[test]
    fn test_unworked_rest_category_is_paid_rest_even_on_workday() {
        let config = config();
        let record = DayRecord::new(2, &config).with_category(DayCategory::RestDay);
        assert_eq!(
            classify_day(&record, &config, 1).status,
            DayStatus::PaidRestDay
        );

        let combo =
            DayRecord::new(3, &config).with_category(DayCategory::RegularHolidayAndRestDay);
        assert_eq!(
            classify_day(&combo, &config, 1).status,
            DayStatus::PaidRestDay
        );
    }

    #[test]
    fn test_unworked_non_rest_category_is_absent_even_on_rest_slot() {
        let config = config();
        let record = DayRecord::new(6, &config).with_category(DayCategory::Normal);
        assert_eq!(classify_day(&record, &config, 1).status, DayStatus::Absent);

        let holiday = DayRecord::new(4, &config).with_category(DayCategory::RegularHoliday);
        assert_eq!(classify_day(&holiday, &config, 1).status, DayStatus::Absent);
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let config = config();
        let record = DayRecord::new(6, &config)
            .with_shift(t("0900"), t("1900"))
            .with_category(DayCategory::SpecialNonWorkingHolidayAndRestDay);

        let result = classify_day(&record, &config, 3);
        let step = result.audit_step;

        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "day_classification");
        assert_eq!(step.input["day_index"], 6);
        assert_eq!(step.input["clock_out"], "1900");
        assert_eq!(
            step.input["category"],
            "special_non_working_holiday_and_rest_day"
        );
        assert_eq!(step.output["status"], "worked");
        assert_eq!(
            step.output["category"],
            "special_non_working_holiday_and_rest_day"
        );
    }

    #[test]
    fn test_audit_step_for_missing_category_is_null() {
        let config = config();
        let record = DayRecord::new(1, &config);
        let step = classify_day(&record, &config, 1).audit_step;
        assert!(step.input["category"].is_null());
        assert_eq!(step.output["status"], "absent");
        assert!(step.reasoning.contains("absent"));
    }
}
