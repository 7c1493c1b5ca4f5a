//! Time-series utilities over pump measures.
//!
//! Modules include:
//! - `order`: stable time ordering of measure series
//! - `state`: infer the pump state at an instant and slice in-window measures
//! - `usage`: accumulate on-time within a window
/// Stable time ordering helpers.
pub mod order;
/// Boundary-state inference and window slicing.
pub mod state;
/// Usage accumulation within a window.
pub mod usage;
