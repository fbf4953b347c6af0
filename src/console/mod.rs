//! Interactive terminal front end.
//!
//! [`Console`] runs the operator menu over any buffered reader and writer, so
//! the binary drives it with stdin/stdout and tests drive it with scripted
//! input. Every value is validated before it reaches the calculation core;
//! invalid entries are reported and asked for again.

mod report;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculation::calculate_week;
use crate::config::{DAYS_PER_WEEK, PayrollConfig, RateTable, validate_wage_and_hours};
use crate::models::{ClockTime, DayCategory, WeeklyPayroll};

pub use report::{DAY_NAMES, WeeklyReport, day_name};

/// Token that clears a day's explicit category.
pub const AUTO_CATEGORY: &str = "auto";

const DEFAULT_EMPLOYEE_NAME: &str = "Employee";

/// A top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Enter the employee's name and per-day clock times and categories.
    ConfigureEmployee,
    /// Compute and print the week.
    GeneratePayroll,
    /// Change daily wage, regular hours and workdays.
    UpdateSettings,
    /// Restore the settings the session started with.
    ResetSettings,
    /// Leave the menu.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ConfigureEmployee),
            "2" => Ok(MenuChoice::GeneratePayroll),
            "3" => Ok(MenuChoice::UpdateSettings),
            "4" => Ok(MenuChoice::ResetSettings),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// How generated payroll is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON of the full result.
    Json,
}

/// The operator menu and the session state it edits.
pub struct Console<R, W> {
    input: R,
    output: W,
    defaults: PayrollConfig,
    config: PayrollConfig,
    week: WeeklyPayroll,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session whose settings start at, and reset to, `defaults`.
    pub fn new(input: R, output: W, defaults: PayrollConfig) -> Self {
        let week = WeeklyPayroll::with_defaults(DEFAULT_EMPLOYEE_NAME, &defaults);
        Self {
            input,
            output,
            config: defaults.clone(),
            defaults,
            week,
            format: OutputFormat::Table,
        }
    }

    /// Sets how generated payroll is printed.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The settings currently in force.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// The week as configured so far.
    pub fn week(&self) -> &WeeklyPayroll {
        &self.week
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let Ok(choice) = line.parse::<MenuChoice>() else {
                writeln!(self.output, "Invalid option. Please try again.")?;
                continue;
            };

            debug!(?choice, "Menu selection");
            let completed = match choice {
                MenuChoice::ConfigureEmployee => self.configure_employee()?,
                MenuChoice::GeneratePayroll => self.generate_payroll()?,
                MenuChoice::UpdateSettings => self.update_settings()?,
                MenuChoice::ResetSettings => self.reset_settings()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
            };

            if !completed {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Weekly Payroll")?;
        writeln!(self.output, "1. Configure employee")?;
        writeln!(self.output, "2. Generate payroll")?;
        writeln!(self.output, "3. Update settings")?;
        writeln!(self.output, "4. Reset settings to defaults")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until `parse` accepts the answer. A blank answer yields
    /// `Ok(Some(None))`; end of input yields `Ok(None)`.
    fn prompt<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> io::Result<Option<Option<T>>> {
        loop {
            write!(self.output, "{}: ", label)?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(None));
            }

            match parse(&answer) {
                Ok(value) => return Ok(Some(Some(value))),
                Err(message) => {
                    warn!(input = %answer, "Rejected input");
                    writeln!(self.output, "{}", message)?;
                }
            }
        }
    }

    fn configure_employee(&mut self) -> io::Result<bool> {
        let current = self.week.employee_name().to_string();
        let Some(name) = self.prompt(&format!("Employee name [{}]", current), |s| {
            Ok(s.to_string())
        })?
        else {
            return Ok(false);
        };
        if let Some(name) = name {
            self.week.set_employee_name(name);
        }

        writeln!(
            self.output,
            "Enter times as HHMM. Leave blank to keep the current value. \
             Enter {} for both IN and OUT for a day off.",
            ClockTime::NO_SHIFT_MARKER
        )?;
        writeln!(
            self.output,
            "Categories: normal, rest, snwh, snwhr, rh, rhr, or {} to follow the schedule.",
            AUTO_CATEGORY
        )?;

        for day_index in 1..=DAYS_PER_WEEK {
            if !self.configure_day(day_index)? {
                return Ok(false);
            }
        }

        writeln!(self.output, "Employee configured.")?;
        Ok(true)
    }

    fn configure_day(&mut self, day_index: u8) -> io::Result<bool> {
        let Some(record) = self.week.day(day_index).cloned() else {
            return Ok(true);
        };
        let name = day_name(day_index);

        let Some(clock_in) = self.prompt(
            &format!("{} IN time [{}]", name, record.clock_in),
            parse_clock_time,
        )?
        else {
            return Ok(false);
        };
        let Some(clock_out) = self.prompt(
            &format!("{} OUT time [{}]", name, record.clock_out),
            parse_clock_time,
        )?
        else {
            return Ok(false);
        };
        let current_category = record
            .category
            .map(|category| category.as_str())
            .unwrap_or(AUTO_CATEGORY);
        let Some(category) = self.prompt(
            &format!("{} category [{}]", name, current_category),
            parse_category,
        )?
        else {
            return Ok(false);
        };

        // Indices come from 1..=DAYS_PER_WEEK, so the setters cannot fail
        if let Some(clock_in) = clock_in {
            self.apply(|week| week.set_clock_in(day_index, clock_in))?;
        }
        if let Some(clock_out) = clock_out {
            self.apply(|week| week.set_clock_out(day_index, clock_out))?;
        }
        if let Some(category) = category {
            self.apply(|week| week.set_category(day_index, category))?;
        }
        Ok(true)
    }

    fn apply(
        &mut self,
        edit: impl FnOnce(&mut WeeklyPayroll) -> crate::error::PayrollResult<()>,
    ) -> io::Result<()> {
        if let Err(e) = edit(&mut self.week) {
            writeln!(self.output, "Error: {}", e)?;
        }
        Ok(())
    }

    fn generate_payroll(&mut self) -> io::Result<bool> {
        let result = match calculate_week(&self.week, &self.config, &RateTable::STANDARD) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Payroll generation failed");
                writeln!(self.output, "Error: {}", e)?;
                return Ok(true);
            }
        };

        match self.format {
            OutputFormat::Table => {
                writeln!(self.output, "{}", WeeklyReport::new(&self.week, &result))?;
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&result).map_err(io::Error::other)?;
                writeln!(self.output, "{}", json)?;
            }
        }
        Ok(true)
    }

    fn update_settings(&mut self) -> io::Result<bool> {
        let current = self.config.clone();
        writeln!(self.output, "Leave blank to keep the current value.")?;

        let Some(daily_wage) = self.prompt(
            &format!("Daily wage [{}]", current.daily_wage.normalize()),
            |s| parse_daily_wage(s, current.regular_hours),
        )?
        else {
            return Ok(false);
        };
        let daily_wage = daily_wage.unwrap_or(current.daily_wage);

        let Some(regular_hours) = self.prompt(
            &format!("Regular hours per day [{}]", current.regular_hours.normalize()),
            |s| parse_regular_hours(s, daily_wage),
        )?
        else {
            return Ok(false);
        };
        let regular_hours = regular_hours.unwrap_or(current.regular_hours);

        let Some(workdays) = self.prompt(
            &format!("Working days per week [{}]", current.workdays),
            parse_workdays,
        )?
        else {
            return Ok(false);
        };
        let workdays = workdays.unwrap_or(current.workdays);

        self.set_config(PayrollConfig {
            daily_wage,
            regular_hours,
            workdays,
        })?;
        writeln!(
            self.output,
            "Settings updated. Working days: {}, rest days: {}.",
            self.config.workdays,
            self.config.rest_days()
        )?;
        Ok(true)
    }

    fn reset_settings(&mut self) -> io::Result<bool> {
        self.set_config(self.defaults.clone())?;
        writeln!(self.output, "Settings reset to defaults.")?;
        Ok(true)
    }

    fn set_config(&mut self, config: PayrollConfig) -> io::Result<()> {
        if let Err(e) = config.validate() {
            writeln!(self.output, "Error: {}", e)?;
            return Ok(());
        }
        debug!(
            daily_wage = %config.daily_wage,
            regular_hours = %config.regular_hours,
            workdays = config.workdays,
            "Settings changed"
        );
        self.week.apply_wage_settings(&config);
        self.config = config;
        Ok(())
    }
}

fn parse_clock_time(s: &str) -> Result<ClockTime, String> {
    s.parse::<ClockTime>().map_err(|e| e.to_string())
}

fn parse_category(s: &str) -> Result<Option<DayCategory>, String> {
    if s.eq_ignore_ascii_case(AUTO_CATEGORY) {
        return Ok(None);
    }
    s.parse::<DayCategory>().map(Some).map_err(|e| e.to_string())
}

fn parse_decimal(s: &str, what: &str) -> Result<Decimal, String> {
    Decimal::from_str(s).map_err(|_| format!("Invalid {}: '{}' is not a number", what, s))
}

fn parse_daily_wage(s: &str, regular_hours: Decimal) -> Result<Decimal, String> {
    let wage = parse_decimal(s, "daily wage")?;
    validate_wage_and_hours(wage, regular_hours).map_err(|e| e.to_string())?;
    Ok(wage)
}

fn parse_regular_hours(s: &str, daily_wage: Decimal) -> Result<Decimal, String> {
    let hours = parse_decimal(s, "regular hours")?;
    validate_wage_and_hours(daily_wage, hours).map_err(|e| e.to_string())?;
    Ok(hours)
}

fn parse_workdays(s: &str) -> Result<u8, String> {
    s.parse::<u8>()
        .ok()
        .filter(|days| *days <= DAYS_PER_WEEK)
        .ok_or_else(|| format!("Invalid working days: expected 0 to {}", DAYS_PER_WEEK))
}
