//! Time windows over which usage is computed.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::PumpError;

/// A `[start, end]` pair of instants.
///
/// Both bounds are inclusive for "in range" checks. Neither bound needs to
/// coincide with a measure. An inverted or degenerate window (`end <= start`)
/// is representable and treated as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// Lower bound.
    pub start: DateTime<Utc>,
    /// Upper bound.
    pub end: DateTime<Utc>,
}

impl Window {
    /// Build a window without validating the bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a window, rejecting empty or inverted bounds.
    ///
    /// # Errors
    /// Returns `PumpError::InvalidArg` when `end <= start`.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, PumpError> {
        if end <= start {
            return Err(PumpError::invalid_arg(format!(
                "window end {end} is not after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// True when the window covers no time (`end <= start`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Length of the window; zero for empty windows.
    #[must_use]
    pub fn length(&self) -> TimeDelta {
        if self.is_empty() {
            TimeDelta::zero()
        } else {
            self.end - self.start
        }
    }

    /// Inclusive membership: `start <= t <= end`.
    #[must_use]
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }

    /// Strict membership: `start < t < end`.
    #[must_use]
    pub fn contains_strict(&self, t: DateTime<Utc>) -> bool {
        self.start < t && t < self.end
    }
}

/// A continuous `[start, end)` interval during which the pump was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
}

impl Span {
    /// Create a span from its bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Time covered by the span.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
