//! pump-core
//!
//! Core types and time-series algorithms for pump usage computation.
//!
//! - `types`: the data model re-exported from `pump-types`.
//! - `timeseries`: ordering, boundary-state inference and usage accumulation.
//!
//! Every function here is pure and synchronous. Inputs are borrowed and never
//! reordered in place; the ordering step works on its own copy.
//!
//! Enable the `tracing` feature to get `debug`/`trace` events for the
//! zero-result branches and the ordered series.
#![warn(missing_docs)]

/// Time-series utilities: ordering, state inference and usage.
pub mod timeseries;
pub mod types;

pub use timeseries::order::{is_time_ordered, sort_measures};
pub use timeseries::state::{in_window, state_at};
pub use timeseries::usage::{
    UsageBreakdown, compute_usage, compute_usage_with, on_spans, usage_breakdown,
};
pub use types::*;
