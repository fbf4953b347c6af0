//! Plain-text rendering of a weekly result.

use std::fmt;

use rust_decimal::Decimal;

use crate::models::{DayResult, DayStatus, WeeklyPayroll, WeeklyResult};

/// Names of the seven days, day 1 first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const HEADERS: [&str; 9] = [
    "Day", "In", "Out", "Status", "Hours", "OT day", "OT night", "Night", "Pay",
];

/// Name of a 1-based day index, or `"Day N"` past the end of the week.
pub fn day_name(day_index: u8) -> String {
    day_index
        .checked_sub(1)
        .and_then(|position| DAY_NAMES.get(position as usize))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Day {}", day_index))
}

fn status_label(status: &DayStatus) -> String {
    match status {
        DayStatus::Worked(category) => category.label().to_string(),
        DayStatus::PaidRestDay => "Rest (paid)".to_string(),
        DayStatus::Absent => "Absent".to_string(),
    }
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

fn hours(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// A weekly result laid out as a table, amounts shown to two decimals.
pub struct WeeklyReport<'a> {
    week: &'a WeeklyPayroll,
    result: &'a WeeklyResult,
}

impl<'a> WeeklyReport<'a> {
    /// Pairs a result with the week it was computed from.
    pub fn new(week: &'a WeeklyPayroll, result: &'a WeeklyResult) -> Self {
        Self { week, result }
    }

    fn holidays_worked(&self) -> usize {
        self.result
            .days
            .iter()
            .filter(|day| match day.status {
                DayStatus::Worked(category) => category.holiday().is_some(),
                DayStatus::PaidRestDay | DayStatus::Absent => false,
            })
            .count()
    }

    fn row(&self, day: &DayResult) -> [String; 9] {
        let (clock_in, clock_out) = match (day.status, self.week.day(day.day_index)) {
            (DayStatus::Worked(_), Some(record)) => {
                (record.clock_in.to_string(), record.clock_out.to_string())
            }
            _ => ("-".to_string(), "-".to_string()),
        };

        [
            day_name(day.day_index),
            clock_in,
            clock_out,
            status_label(&day.status),
            hours(day.worked_hours),
            hours(day.day_overtime_hours),
            hours(day.night_overtime_hours),
            hours(day.night_shift_hours),
            money(day.day_pay),
        ]
    }
}

impl fmt::Display for WeeklyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 9]> = self.result.days.iter().map(|day| self.row(day)).collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }
        let total_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

        writeln!(f, "Payroll for {}", self.result.employee_name)?;
        writeln!(f, "{}", "=".repeat(total_width))?;

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(label, width)| format!("{:<width$}", label, width = width))
            .collect();
        writeln!(f, "{}", header.join(" | ").trim_end())?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .enumerate()
                .map(|(column, (cell, width))| {
                    // Text left-aligned, figures right-aligned
                    if column < 4 {
                        format!("{:<width$}", cell, width = width)
                    } else {
                        format!("{:>width$}", cell, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" | ").trim_end())?;
        }

        let summary = &self.result.summary;
        writeln!(f, "{}", "-".repeat(total_width))?;
        writeln!(f, "Days present:        {}", summary.days_present)?;
        writeln!(f, "Days absent:         {}", summary.days_absent)?;
        writeln!(f, "Rest days worked:    {}", summary.rest_days_present)?;
        writeln!(f, "Rest days off:       {}", summary.rest_days_absent)?;
        writeln!(f, "Holidays worked:     {}", self.holidays_worked())?;
        writeln!(f, "Hours worked:        {}", hours(summary.total_worked_hours))?;
        writeln!(
            f,
            "Overtime hours:      {} ({} night)",
            hours(summary.total_overtime_hours),
            hours(summary.total_night_overtime_hours)
        )?;
        write!(f, "Total pay:           {}", money(summary.total_pay))
    }
}
