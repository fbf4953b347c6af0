//! Clock arithmetic for shifts that may cross midnight.
//!
//! Shifts are laid out on an absolute minute line starting at midnight of the
//! day the shift begins. A clock-out at or before the clock-in is read as the
//! next day, so a shift spans at most 24 hours.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{ClockTime, MINUTES_PER_DAY};

const DAY: i64 = MINUTES_PER_DAY as i64;

/// A shift placed on the absolute minute line.
///
/// # Example
///
/// ```
/// use weekly_payroll::calculation::ShiftSpan;
///
/// let span = ShiftSpan::new("0900".parse().unwrap(), "0100".parse().unwrap());
/// assert_eq!(span.start_minute(), 9 * 60);
/// assert_eq!(span.end_minute(), 25 * 60);
/// assert_eq!(span.worked_minutes(), 16 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSpan {
    start: i64,
    end: i64,
}

impl ShiftSpan {
    /// Places a clock-in/clock-out pair on the minute line.
    ///
    /// If `clock_out <= clock_in` the clock-out is moved to the next day.
    pub fn new(clock_in: ClockTime, clock_out: ClockTime) -> Self {
        let start = i64::from(clock_in.minute_of_day());
        let mut end = i64::from(clock_out.minute_of_day());
        if end <= start {
            end += DAY;
        }
        Self { start, end }
    }

    /// Minute the shift starts at.
    pub fn start_minute(&self) -> i64 {
        self.start
    }

    /// Minute the shift ends at; may exceed one day.
    pub fn end_minute(&self) -> i64 {
        self.end
    }

    /// Length of the shift in minutes.
    pub fn worked_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// Minutes of the shift inside the night window.
    pub fn night_minutes(&self) -> i64 {
        night_minutes(self.start, self.end)
    }
}

/// Converts a count of minutes to fractional hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Returns the elapsed hours between a clock-in and a clock-out.
///
/// A clock-out at or before the clock-in is taken to be on the next day.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidTimeRange`] if the elapsed time is not in
/// `(0, 24]` hours.
///
/// # Examples
///
/// ```
/// use weekly_payroll::calculation::worked_hours;
/// use rust_decimal::Decimal;
///
/// let hours = worked_hours("0900".parse().unwrap(), "1730".parse().unwrap()).unwrap();
/// assert_eq!(hours, Decimal::new(85, 1));
///
/// // Crossing midnight
/// let hours = worked_hours("0900".parse().unwrap(), "0100".parse().unwrap()).unwrap();
/// assert_eq!(hours, Decimal::from(16));
/// ```
pub fn worked_hours(clock_in: ClockTime, clock_out: ClockTime) -> PayrollResult<Decimal> {
    let minutes = ShiftSpan::new(clock_in, clock_out).worked_minutes();

    if minutes <= 0 || minutes > DAY {
        return Err(PayrollError::InvalidTimeRange {
            clock_in: clock_in.to_string(),
            clock_out: clock_out.to_string(),
            message: format!("elapsed time of {} minutes is outside one day", minutes),
        });
    }

    Ok(minutes_to_hours(minutes))
}

/// Whether a clock time falls in the night window.
///
/// The window starts at 22:00 inclusive and ends at 06:00 exclusive.
///
/// # Examples
///
/// ```
/// use weekly_payroll::calculation::is_night_shift;
///
/// assert!(is_night_shift("2200".parse().unwrap()));
/// assert!(!is_night_shift("2159".parse().unwrap()));
/// assert!(is_night_shift("0559".parse().unwrap()));
/// assert!(!is_night_shift("0600".parse().unwrap()));
/// ```
pub fn is_night_shift(clock_out: ClockTime) -> bool {
    clock_out >= ClockTime::NIGHT_START || clock_out < ClockTime::NIGHT_END
}

/// Counts the minutes of `[start, end)` that fall in a night window.
///
/// Both bounds are absolute minutes from midnight of the shift's first day;
/// `end` may run into the following days.
pub fn night_minutes(start: i64, end: i64) -> i64 {
    if end <= start {
        return 0;
    }

    let night_start = i64::from(ClockTime::NIGHT_START.minute_of_day());
    let night_end = i64::from(ClockTime::NIGHT_END.minute_of_day());

    // Windows open at 22:00 of day k - 1 and close at 06:00 of day k
    let first_day = start.div_euclid(DAY);
    let last_day = end.div_euclid(DAY) + 1;

    (first_day..=last_day)
        .map(|day| {
            let window_start = day * DAY - (DAY - night_start);
            let window_end = day * DAY + night_end;
            (end.min(window_end) - start.max(window_start)).max(0)
        })
        .sum()
}
