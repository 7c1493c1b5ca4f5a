//! Configuration types shared by the calculator and the time-series helpers.

use serde::{Deserialize, Serialize};

/// What to do when no measure exists at or before the window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum UnknownStartPolicy {
    /// The state at `start` cannot be derived from data, so the whole window
    /// yields zero usage.
    #[default]
    Unprocessable,
    /// Treat the pump as off at `start` and still account for the measures
    /// observed inside the window.
    AssumeOff,
}

/// Global configuration for usage computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageConfig {
    /// Policy applied when the state at the window start is unknown.
    #[serde(default)]
    pub unknown_start: UnknownStartPolicy,
}
