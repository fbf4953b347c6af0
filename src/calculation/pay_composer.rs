//! Daily pay composition.
//!
//! Combines the day classification, overtime split, and rate table into the
//! final pay for one day. Steps run in a fixed order and each appends an
//! [`AuditStep`] to the day's trail:
//!
//! 1. Classify the day (absent, paid rest, or worked with a category)
//! 2. Detect overtime and split it into day and night portions
//! 3. Base pay: `daily_wage × base multiplier`, times the night differential
//!    when regular hours touch the night window
//! 4. Overtime pay at the hourly rate `daily_wage / regular_hours`
//! 5. Day total
//!
//! Amounts are never rounded here; presentation is left to the caller.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{PayrollConfig, RateTable, ShiftPeriod, validate_wage_and_hours};
use crate::error::PayrollResult;
use crate::models::{AuditStep, DayCategory, DayRecord, DayResult, DayStatus};

use super::daily_overtime::{DailyOvertimeDetection, detect_daily_overtime};
use super::day_classifier::classify_day;
use super::time_arithmetic::{ShiftSpan, minutes_to_hours, worked_hours};

/// Computes the pay for a single day.
///
/// # Arguments
///
/// * `record` - The day's clock times, category, and wage parameters
/// * `config` - The schedule, used to tell rest slots from working days
/// * `rates` - The multipliers to apply
///
/// # Errors
///
/// - [`PayrollError::InvalidConfig`](crate::error::PayrollError::InvalidConfig)
///   if the record carries a wage outside `[0, MAX_DAILY_WAGE]` or regular
///   hours outside `[1 minute, 24]`
/// - [`PayrollError::InvalidTimeRange`](crate::error::PayrollError::InvalidTimeRange)
///   if the shift does not fit in one day
///
/// # Examples
///
/// ## Ten hours on a normal day
///
/// ```
/// use weekly_payroll::calculation::compute_day_pay;
/// use weekly_payroll::config::{PayrollConfig, RateTable};
/// use weekly_payroll::models::DayRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PayrollConfig::default();
/// let record = DayRecord::new(1, &config)
///     .with_shift("0900".parse().unwrap(), "1900".parse().unwrap());
///
/// let result = compute_day_pay(&record, &config, &RateTable::STANDARD).unwrap();
/// assert_eq!(result.overtime_hours, Decimal::from(2));
/// assert_eq!(result.day_pay, Decimal::from_str("656.25").unwrap());
/// ```
///
/// ## Unworked working day
///
/// ```
/// use weekly_payroll::calculation::compute_day_pay;
/// use weekly_payroll::config::{PayrollConfig, RateTable};
/// use weekly_payroll::models::{DayRecord, DayStatus};
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let record = DayRecord::new(2, &config);
///
/// let result = compute_day_pay(&record, &config, &RateTable::STANDARD).unwrap();
/// assert_eq!(result.status, DayStatus::Absent);
/// assert_eq!(result.day_pay, Decimal::ZERO);
/// ```
pub fn compute_day_pay(
    record: &DayRecord,
    config: &PayrollConfig,
    rates: &RateTable,
) -> PayrollResult<DayResult> {
    validate_wage_and_hours(record.daily_wage, record.regular_hours)?;

    let classification = classify_day(record, config, 1);
    let scheduled_rest_day = classification.scheduled_rest_day;

    let category = match classification.status {
        DayStatus::Worked(category) => category,
        status @ DayStatus::PaidRestDay => {
            let mut result =
                DayResult::unworked(record.day_index, scheduled_rest_day, status, record.daily_wage);
            result.audit_steps.push(classification.audit_step);
            result.audit_steps.push(unworked_pay_step(2, status, record.daily_wage));
            return Ok(result);
        }
        status @ DayStatus::Absent => {
            let mut result =
                DayResult::unworked(record.day_index, scheduled_rest_day, status, Decimal::ZERO);
            result.audit_steps.push(classification.audit_step);
            result.audit_steps.push(unworked_pay_step(2, status, Decimal::ZERO));
            return Ok(result);
        }
    };

    let mut audit_steps = vec![classification.audit_step];

    let worked = worked_hours(record.clock_in, record.clock_out)?;
    let span = ShiftSpan::new(record.clock_in, record.clock_out);
    let night_shift_hours = minutes_to_hours(span.night_minutes());

    let overtime = detect_daily_overtime(&span, record.regular_hours, 2);
    audit_steps.push(overtime.audit_step.clone());

    let (base_pay, night_differential_applied, base_step) =
        compose_base_pay(record, category, &overtime, rates, 3);
    audit_steps.push(base_step);

    let (overtime_pay, overtime_step) = compose_overtime_pay(record, category, &overtime, rates, 4);
    audit_steps.push(overtime_step);

    let day_pay = base_pay + overtime_pay;
    audit_steps.push(AuditStep {
        step_number: 5,
        rule_id: "day_total".to_string(),
        rule_name: "Day Total".to_string(),
        input: serde_json::json!({
            "base_pay": base_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "day_pay": day_pay.normalize().to_string()
        }),
        reasoning: format!(
            "${} base + ${} overtime = ${}",
            base_pay.normalize(),
            overtime_pay.normalize(),
            day_pay.normalize()
        ),
    });

    debug!(
        day_index = record.day_index,
        category = category.as_str(),
        worked_hours = %worked.normalize(),
        overtime_hours = %overtime.overtime_hours.normalize(),
        day_pay = %day_pay.normalize(),
        "Computed day pay"
    );

    Ok(DayResult {
        day_index: record.day_index,
        scheduled_rest_day,
        status: DayStatus::Worked(category),
        worked_hours: worked,
        regular_hours_worked: overtime.regular_hours_worked,
        overtime_hours: overtime.overtime_hours,
        day_overtime_hours: overtime.day_overtime_hours,
        night_overtime_hours: overtime.night_overtime_hours,
        night_shift_hours,
        base_pay,
        night_differential_applied,
        overtime_pay,
        day_pay,
        audit_steps,
    })
}

fn unworked_pay_step(step_number: u32, status: DayStatus, day_pay: Decimal) -> AuditStep {
    let reasoning = match status {
        DayStatus::PaidRestDay => format!("Rest day not worked: daily wage of ${} paid", day_pay),
        _ => "No shift on a working day: nothing paid".to_string(),
    };

    AuditStep {
        step_number,
        rule_id: "unworked_day_pay".to_string(),
        rule_name: "Unworked Day Pay".to_string(),
        input: serde_json::to_value(status).unwrap_or(serde_json::Value::Null),
        output: serde_json::json!({
            "day_pay": day_pay.normalize().to_string()
        }),
        reasoning,
    }
}

fn compose_base_pay(
    record: &DayRecord,
    category: DayCategory,
    overtime: &DailyOvertimeDetection,
    rates: &RateTable,
    step_number: u32,
) -> (Decimal, bool, AuditStep) {
    let multiplier = rates.base_multiplier(category);
    let undifferentiated = record.daily_wage * multiplier;

    let night_differential_applied = overtime.regular_hours_in_night_window;
    let base_pay = if night_differential_applied {
        undifferentiated * rates.night_differential()
    } else {
        undifferentiated
    };

    let reasoning = if night_differential_applied {
        format!(
            "${} × {} ({}) × {} night differential = ${}",
            record.daily_wage.normalize(),
            multiplier.normalize(),
            category,
            rates.night_differential().normalize(),
            base_pay.normalize()
        )
    } else {
        format!(
            "${} × {} ({}) = ${}",
            record.daily_wage.normalize(),
            multiplier.normalize(),
            category,
            base_pay.normalize()
        )
    };

    let step = AuditStep {
        step_number,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        input: serde_json::json!({
            "daily_wage": record.daily_wage.normalize().to_string(),
            "category": category.as_str(),
            "base_multiplier": multiplier.normalize().to_string(),
            "regular_hours_in_night_window": night_differential_applied
        }),
        output: serde_json::json!({
            "base_pay": base_pay.normalize().to_string(),
            "night_differential_applied": night_differential_applied
        }),
        reasoning,
    };

    (base_pay, night_differential_applied, step)
}

fn compose_overtime_pay(
    record: &DayRecord,
    category: DayCategory,
    overtime: &DailyOvertimeDetection,
    rates: &RateTable,
    step_number: u32,
) -> (Decimal, AuditStep) {
    let hourly_rate = record.daily_wage / record.regular_hours;
    let day_multiplier = rates.overtime_multiplier(category, ShiftPeriod::Day);
    let night_multiplier = rates.overtime_multiplier(category, ShiftPeriod::Night);

    let day_amount = overtime.day_overtime_hours * hourly_rate * day_multiplier;
    let night_amount = overtime.night_overtime_hours * hourly_rate * night_multiplier;
    let overtime_pay = day_amount + night_amount;

    let reasoning = if overtime.overtime_hours > Decimal::ZERO {
        format!(
            "{} day hours × ${} × {} + {} night hours × ${} × {} = ${}",
            overtime.day_overtime_hours.normalize(),
            hourly_rate.normalize(),
            day_multiplier.normalize(),
            overtime.night_overtime_hours.normalize(),
            hourly_rate.normalize(),
            night_multiplier.normalize(),
            overtime_pay.normalize()
        )
    } else {
        "No overtime worked".to_string()
    };

    let step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "day_overtime_hours": overtime.day_overtime_hours.normalize().to_string(),
            "night_overtime_hours": overtime.night_overtime_hours.normalize().to_string(),
            "day_multiplier": day_multiplier.normalize().to_string(),
            "night_multiplier": night_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "day_overtime_pay": day_amount.normalize().to_string(),
            "night_overtime_pay": night_amount.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        reasoning,
    };

    (overtime_pay, step)
}
