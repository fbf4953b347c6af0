//! Configuration for the payroll engine.
//!
//! This module provides the per-run [`PayrollConfig`], a YAML [`ConfigLoader`]
//! for it, and the fixed [`RateTable`] of premiums.
//!
//! # Example
//!
//! ```no_run
//! use weekly_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Regular hours: {}", config.regular_hours);
//! ```

mod loader;
mod rates;
mod types;

pub use loader::ConfigLoader;
pub use rates::{CategoryRates, NIGHT_DIFFERENTIAL, RateTable, ShiftPeriod};
pub(crate) use types::validate_wage_and_hours;
pub use types::{
    DAYS_PER_WEEK, DEFAULT_DAILY_WAGE, DEFAULT_REGULAR_HOURS, DEFAULT_WORKDAYS, MAX_DAILY_WAGE,
    PayrollConfig,
};
