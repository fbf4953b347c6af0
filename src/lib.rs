//! Weekly Payroll Engine
//!
//! This crate computes one employee's weekly pay from daily clock-in/out times,
//! applying overtime, night-shift differential, rest-day and holiday premiums.
//!
//! The calculation core lives in [`calculation`]; [`console`] is the
//! interactive menu used by the `weekly-payroll` binary.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
