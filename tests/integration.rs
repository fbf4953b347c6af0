//! Integration tests for the Weekly Payroll Engine.
//!
//! This test suite covers week-level scenarios through the JSON boundary:
//! - Ordinary weeks and absences
//! - Daily overtime, day and night
//! - Night differential
//! - Rest days and holidays
//! - Configuration loading
//! - Error cases
//! - The interactive console

use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::io::Cursor;
use std::str::FromStr;

use weekly_payroll::calculation::calculate_week;
use weekly_payroll::config::{ConfigLoader, PayrollConfig, RateTable};
use weekly_payroll::console::{Console, OutputFormat};
use weekly_payroll::error::PayrollError;
use weekly_payroll::models::{WeeklyPayroll, WeeklyResult};

// =============================================================================
// Test Helpers
// =============================================================================

fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn calculate_with(config: &PayrollConfig, body: Value) -> Result<Value, PayrollError> {
    let week: WeeklyPayroll = serde_json::from_value(body).expect("valid week JSON");
    let result = calculate_week(&week, config, &RateTable::STANDARD)?;
    Ok(serde_json::to_value(result).unwrap())
}

fn calculate(body: Value) -> Value {
    calculate_with(&PayrollConfig::default(), body).expect("calculation succeeds")
}

/// A week where every day without an entry in `shifts` is left unworked.
fn create_week(name: &str, shifts: Vec<(u8, &str, &str, Option<&str>)>) -> Value {
    let days: Vec<Value> = (1..=7u8)
        .map(|day| match shifts.iter().find(|(index, ..)| *index == day) {
            Some((_, clock_in, clock_out, category)) => json!({
                "day_index": day,
                "clock_in": clock_in,
                "clock_out": clock_out,
                "category": category
            }),
            None => json!({ "day_index": day }),
        })
        .collect();

    json!({
        "employee_name": name,
        "days": days
    })
}

/// Monday to Friday 0900 to 1700, weekend off.
fn standard_shifts() -> Vec<(u8, &'static str, &'static str, Option<&'static str>)> {
    (1..=5).map(|day| (day, "0900", "1700", None)).collect()
}

fn with_shift(
    mut shifts: Vec<(u8, &'static str, &'static str, Option<&'static str>)>,
    shift: (u8, &'static str, &'static str, Option<&'static str>),
) -> Vec<(u8, &'static str, &'static str, Option<&'static str>)> {
    shifts.retain(|(day, ..)| *day != shift.0);
    shifts.push(shift);
    shifts
}

fn assert_decimal_field(value: &Value, expected: &str, label: &str) {
    let actual = normalize_decimal(value.as_str().unwrap());
    let expected = normalize_decimal(expected);
    assert_eq!(actual, expected, "Expected {} {}, got {}", label, expected, actual);
}

fn assert_total_pay(result: &Value, expected: &str) {
    assert_decimal_field(&result["summary"]["total_pay"], expected, "total_pay");
}

fn assert_day_pay(result: &Value, day_index: usize, expected: &str) {
    assert_decimal_field(
        &result["days"][day_index - 1]["day_pay"],
        expected,
        "day_pay",
    );
}

fn assert_counts(result: &Value, present: u64, absent: u64) {
    assert_eq!(result["summary"]["days_present"], present);
    assert_eq!(result["summary"]["days_absent"], absent);
}

// =============================================================================
// SECTION 1: Ordinary Weeks
// =============================================================================

#[test]
fn test_standard_week_pays_seven_daily_wages() {
    // 5 worked days at 500 plus 2 paid rest days at 500
    let result = calculate(create_week("Ana", standard_shifts()));

    assert_total_pay(&result, "3500");
    assert_counts(&result, 7, 0);
    assert_eq!(result["summary"]["rest_days_absent"], 2);
    assert_decimal_field(&result["summary"]["total_worked_hours"], "40", "worked");
}

#[test]
fn test_empty_week_pays_rest_days_only() {
    let result = calculate(create_week("Ana", vec![]));

    assert_total_pay(&result, "1000");
    assert_counts(&result, 2, 5);
    assert_eq!(result["days"][0]["status"]["status"], "absent");
    assert_eq!(result["days"][6]["status"]["status"], "paid_rest_day");
}

#[test]
fn test_two_absences() {
    // Wednesday and Friday missed
    let shifts = vec![
        (1, "0900", "1700", None),
        (2, "0900", "1700", None),
        (4, "0900", "1700", None),
    ];
    let result = calculate(create_week("Ana", shifts));

    assert_total_pay(&result, "2500");
    assert_counts(&result, 5, 2);
    assert_day_pay(&result, 3, "0");
}

#[test]
fn test_short_shift_still_earns_daily_wage() {
    let shifts = with_shift(standard_shifts(), (2, "0900", "1300", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 2, "500");
    assert_decimal_field(&result["days"][1]["worked_hours"], "4", "worked_hours");
}

// =============================================================================
// SECTION 2: Daily Overtime
// =============================================================================

#[test]
fn test_two_hours_day_overtime() {
    let shifts = with_shift(standard_shifts(), (1, "0900", "1900", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 1, "656.25");
    assert_decimal_field(&result["days"][0]["day_overtime_hours"], "2", "day OT");
    assert_total_pay(&result, "3656.25");
}

#[test]
fn test_overtime_into_night_window() {
    // Regular 0900-1700, day OT 1700-2200, night OT 2200-0100
    let shifts = with_shift(standard_shifts(), (1, "0900", "0100", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 1, "1148.4375");
    assert_decimal_field(&result["days"][0]["day_overtime_hours"], "5", "day OT");
    assert_decimal_field(&result["days"][0]["night_overtime_hours"], "3", "night OT");
    assert_decimal_field(
        &result["summary"]["total_night_overtime_hours"],
        "3",
        "night OT total",
    );
}

#[test]
fn test_overtime_every_weekday() {
    let shifts: Vec<_> = (1..=5).map(|day| (day, "0800", "1800", None)).collect();
    let result = calculate(create_week("Ana", shifts));

    // 5 × 656.25 + 2 × 500
    assert_total_pay(&result, "4281.25");
    assert_decimal_field(&result["summary"]["total_overtime_hours"], "10", "OT");
}

// =============================================================================
// SECTION 3: Night Differential
// =============================================================================

#[test]
fn test_full_night_shift() {
    let shifts = with_shift(standard_shifts(), (3, "2200", "0600", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 3, "550");
    assert_eq!(result["days"][2]["night_differential_applied"], true);
    assert_decimal_field(&result["days"][2]["night_shift_hours"], "8", "night hours");
}

#[test]
fn test_evening_shift_with_night_overtime() {
    let shifts = with_shift(standard_shifts(), (3, "1800", "0400", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 3, "721.875");
}

#[test]
fn test_shift_ending_at_window_start_has_no_differential() {
    let shifts = with_shift(standard_shifts(), (3, "1400", "2200", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 3, "500");
    assert_eq!(result["days"][2]["night_differential_applied"], false);
}

#[test]
fn test_equal_times_off_the_marker_are_a_full_day() {
    let shifts = with_shift(standard_shifts(), (2, "2200", "2200", None));
    let result = calculate(create_week("Ana", shifts));

    assert_eq!(result["days"][1]["status"]["status"], "worked");
    assert_eq!(result["days"][1]["status"]["category"], "normal");
    assert_decimal_field(&result["days"][1]["worked_hours"], "24", "worked hours");
    // 550 base + 16 × 62.5 × 1.25
    assert_day_pay(&result, 2, "1800");
    assert_counts(&result, 7, 0);
}

// =============================================================================
// SECTION 4: Rest Days and Holidays
// =============================================================================

#[test]
fn test_worked_saturday_uses_rest_day_rate() {
    let shifts = with_shift(standard_shifts(), (6, "0900", "1700", None));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 6, "650");
    assert_eq!(result["days"][5]["status"]["category"], "rest_day");
    assert_eq!(result["summary"]["rest_days_present"], 1);
    assert_eq!(result["summary"]["rest_days_absent"], 1);
}

#[test]
fn test_regular_holiday_on_rest_day() {
    let shifts = with_shift(
        standard_shifts(),
        (7, "0900", "1700", Some("regular_holiday_and_rest_day")),
    );
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 7, "1300");
}

#[test]
fn test_holidays_with_overtime() {
    let shifts = with_shift(
        with_shift(
            standard_shifts(),
            (2, "0900", "1900", Some("regular_holiday")),
        ),
        (4, "0900", "1900", Some("special_non_working_holiday")),
    );
    let result = calculate(create_week("Ana", shifts));

    // 1000 + 2 × 62.5 × 2.6
    assert_day_pay(&result, 2, "1325");
    // 650 + 2 × 62.5 × 1.69
    assert_day_pay(&result, 4, "861.25");
}

#[test]
fn test_unworked_holiday_is_absent() {
    let mut shifts = standard_shifts();
    shifts.retain(|(day, ..)| *day != 2);
    shifts.push((2, "0900", "0900", Some("regular_holiday")));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 2, "0");
    assert_counts(&result, 6, 1);
}

#[test]
fn test_rest_category_on_weekday_is_paid_when_not_worked() {
    let mut shifts = standard_shifts();
    shifts.retain(|(day, ..)| *day != 5);
    shifts.push((5, "0900", "0900", Some("rest_day")));
    let result = calculate(create_week("Ana", shifts));

    assert_day_pay(&result, 5, "500");
    assert_counts(&result, 7, 0);
}

// =============================================================================
// SECTION 5: Configuration
// =============================================================================

#[test]
fn test_six_day_schedule() {
    let config = ConfigLoader::parse("workdays: 6\n").unwrap();
    let result = calculate_with(&config, create_week("Ana", standard_shifts())).unwrap();

    // Saturday is now a working day left unworked
    assert_counts(&result, 6, 1);
    assert_total_pay(&result, "3000");
}

#[test]
fn test_config_file_wage_applies_to_new_week() {
    let path = std::env::temp_dir().join("weekly_payroll_integration_config.yaml");
    std::fs::write(&path, "daily_wage: 640\nregular_hours: 8\n").unwrap();
    let config = ConfigLoader::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut week = WeeklyPayroll::with_defaults("Ana", &config);
    week.set_clock_out(1, "1900".parse().unwrap()).unwrap();
    let result = calculate_week(&week, &config, &RateTable::STANDARD).unwrap();

    // 640 + 2 × 80 × 1.25
    assert_eq!(result.days[0].day_pay, Decimal::from(840));
}

#[test]
fn test_day_record_wage_overrides() {
    let mut body = create_week("Ana", standard_shifts());
    body["days"][0]["daily_wage"] = json!("720");
    body["days"][0]["regular_hours"] = json!("9");
    body["days"][0]["clock_out"] = json!("1900");
    let result = calculate(body);

    // 720 + 1 × 80 × 1.25
    assert_day_pay(&result, 1, "820");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[test]
fn test_week_with_six_days_rejected() {
    let mut body = create_week("Ana", vec![]);
    body["days"].as_array_mut().unwrap().pop();

    let err = serde_json::from_value::<WeeklyPayroll>(body).unwrap_err();
    assert!(err.to_string().contains("expected 7 days, got 6"));
}

#[test]
fn test_bad_clock_time_rejected() {
    let body = create_week("Ana", vec![(1, "2500", "1700", None)]);
    assert!(serde_json::from_value::<WeeklyPayroll>(body).is_err());
}

#[test]
fn test_unknown_category_rejected() {
    let body = create_week("Ana", vec![(1, "0900", "1700", Some("company_holiday"))]);
    assert!(serde_json::from_value::<WeeklyPayroll>(body).is_err());
}

#[test]
fn test_zero_regular_hours_fails_week() {
    let mut body = create_week("Ana", standard_shifts());
    body["days"][3]["regular_hours"] = json!("0");

    let err = calculate_with(&PayrollConfig::default(), body).unwrap_err();
    assert!(matches!(err, PayrollError::InvalidConfig { .. }));
}

#[test]
fn test_oversized_wage_fails_week() {
    let mut body = create_week("Ana", vec![(1, "0900", "1700", Some("regular_holiday"))]);
    body["days"][0]["daily_wage"] = json!("79228162514264337593543950335");

    match calculate_with(&PayrollConfig::default(), body) {
        Err(PayrollError::InvalidConfig { field, .. }) => assert_eq!(field, "daily_wage"),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

// =============================================================================
// SECTION 7: Result Shape
// =============================================================================

#[test]
fn test_result_round_trips_through_json() {
    let shifts = with_shift(standard_shifts(), (1, "0900", "0100", None));
    let value = calculate(create_week("Ana", shifts));

    let parsed: WeeklyResult = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(parsed.days.len(), 7);
    assert_eq!(serde_json::to_value(&parsed).unwrap(), value);
}

#[test]
fn test_audit_trail_present_for_every_day() {
    let result = calculate(create_week("Ana", standard_shifts()));

    for day in result["days"].as_array().unwrap() {
        let steps = day["audit_steps"].as_array().unwrap();
        assert!(!steps.is_empty());
        assert_eq!(steps[0]["rule_id"], "day_classification");
    }
}

// =============================================================================
// SECTION 8: Console
// =============================================================================

fn run_console(script: &str, format: OutputFormat) -> String {
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        PayrollConfig::default(),
    )
    .with_format(format);
    console.run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_console_configure_and_generate() {
    let mut script = String::from("1\nJuan dela Cruz\n");
    script.push_str("0900\n0100\n\n");
    script.push_str(&"\n1700\n\n".repeat(4));
    script.push_str(&"\n\n\n".repeat(2));
    script.push_str("2\n5\n");

    let output = run_console(&script, OutputFormat::Table);

    assert!(output.contains("Payroll for Juan dela Cruz"));
    // 1148.4375 + 4 × 500 + 2 × 500
    assert!(output.contains("Total pay:           4148.44"));
}

#[test]
fn test_console_settings_change_pay() {
    let output = run_console("3\n800\n\n\n2\n5\n", OutputFormat::Json);

    let start = output.find('{').unwrap();
    let end = output.rfind('}').unwrap();
    let result: Value = serde_json::from_str(&output[start..=end]).unwrap();
    assert_total_pay(&result, "1600");
}
