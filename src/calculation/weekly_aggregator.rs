//! Weekly aggregation.
//!
//! Runs [`compute_day_pay`] over a week and totals attendance, hours, and pay.

use tracing::{debug, info};

use crate::config::{PayrollConfig, RateTable};
use crate::error::PayrollResult;
use crate::models::{DayResult, DayStatus, WeeklyPayroll, WeeklyResult, WeeklySummary};

use super::pay_composer::compute_day_pay;

/// Totals a set of day results.
///
/// Absent days count toward `days_absent`; worked days and paid rest days
/// count toward `days_present`. On scheduled rest slots, worked days count as
/// `rest_days_present` and days off as `rest_days_absent`. A rest slot taken
/// off as paid rest therefore counts in both `days_present` and
/// `rest_days_absent`.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::{aggregate, compute_day_pay};
/// use weekly_payroll::config::{PayrollConfig, RateTable};
/// use weekly_payroll::models::DayRecord;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let days: Vec<_> = (1..=7)
///     .map(|i| {
///         let record = DayRecord::new(i, &config);
///         compute_day_pay(&record, &config, &RateTable::STANDARD).unwrap()
///     })
///     .collect();
///
/// let summary = aggregate(&days);
/// assert_eq!(summary.days_absent, 5);
/// assert_eq!(summary.days_present, 2);
/// assert_eq!(summary.total_pay, Decimal::from(1000));
/// ```
pub fn aggregate(days: &[DayResult]) -> WeeklySummary {
    days.iter().fold(WeeklySummary::default(), |mut summary, day| {
        match day.status {
            DayStatus::Absent => summary.days_absent += 1,
            DayStatus::Worked(_) | DayStatus::PaidRestDay => summary.days_present += 1,
        }

        if day.scheduled_rest_day {
            match day.status {
                DayStatus::Worked(_) => summary.rest_days_present += 1,
                DayStatus::PaidRestDay | DayStatus::Absent => summary.rest_days_absent += 1,
            }
        }

        summary.total_pay += day.day_pay;
        summary.total_overtime_hours += day.day_overtime_hours + day.night_overtime_hours;
        summary.total_night_overtime_hours += day.night_overtime_hours;
        summary.total_worked_hours += day.worked_hours;
        summary
    })
}

/// Computes every day of a week and the weekly totals.
///
/// # Errors
///
/// Returns the first error raised by [`compute_day_pay`]; no partial result
/// is produced.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::calculate_week;
/// use weekly_payroll::config::{PayrollConfig, RateTable};
/// use weekly_payroll::models::WeeklyPayroll;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let mut week = WeeklyPayroll::with_defaults("Maria", &config);
/// for day in 1..=5 {
///     week.set_clock_out(day, "1700".parse().unwrap()).unwrap();
/// }
///
/// let result = calculate_week(&week, &config, &RateTable::STANDARD).unwrap();
/// assert_eq!(result.summary.total_pay, Decimal::from(3500));
/// assert_eq!(result.summary.days_present, 7);
/// ```
pub fn calculate_week(
    week: &WeeklyPayroll,
    config: &PayrollConfig,
    rates: &RateTable,
) -> PayrollResult<WeeklyResult> {
    debug!(employee = week.employee_name(), "Calculating weekly payroll");

    let days = week
        .days()
        .iter()
        .map(|record| compute_day_pay(record, config, rates))
        .collect::<PayrollResult<Vec<_>>>()?;

    let summary = aggregate(&days);

    info!(
        employee = week.employee_name(),
        total_pay = %summary.total_pay.normalize(),
        days_present = summary.days_present,
        days_absent = summary.days_absent,
        overtime_hours = %summary.total_overtime_hours.normalize(),
        "Weekly payroll calculated"
    );

    Ok(WeeklyResult {
        employee_name: week.employee_name().to_string(),
        days,
        summary,
    })
}
