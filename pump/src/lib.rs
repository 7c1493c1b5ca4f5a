//! Pump computes how long a pump was running within a time window.
//!
//! Overview
//! - Input is a collection of timestamped on/off [`Measure`]s, in any order,
//!   plus a `[start, end]` window.
//! - The state between two observations is the earlier observation's flag; the
//!   state at `start` is inferred from the last measure at or before it.
//! - Output is the total on-time clipped to the window, as a `chrono::TimeDelta`.
//!
//! Key behaviors and trade-offs
//! - No errors: empty input, inverted windows, and windows whose start state
//!   cannot be inferred yield zero rather than failing.
//! - Unknown start state: by default the window is unprocessable (zero usage).
//!   `UnknownStartPolicy::AssumeOff` instead counts what was observed inside
//!   the window at the risk of under-reporting.
//! - Inputs are borrowed and never reordered; each call sorts its own copy.
//! - Tracing: enable the `tracing` feature to get spans for every calculator
//!   call and debug events for the zero-result branches.
//!
//! Examples
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use pump::{Measure, UsageCalculator};
//!
//! let day = NaiveDate::from_ymd_opt(2022, 1, 20).unwrap();
//! let at = |h, m| day.and_hms_opt(h, m, 0).unwrap().and_utc();
//!
//! let measures = [
//!     Measure::off(at(9, 0)),
//!     Measure::on(at(5, 30)),
//!     Measure::on(at(11, 0)),
//! ];
//! let calc = UsageCalculator::new();
//! let usage = calc.compute_usage(&measures, at(6, 0), at(12, 0));
//! assert_eq!(usage, TimeDelta::hours(4));
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{UsageCalculator, UsageCalculatorBuilder};

// Re-export core types for convenience
pub use pump_core::{
    Measure, PumpError, Span, UnknownStartPolicy, UsageBreakdown, UsageConfig, Window,
};
