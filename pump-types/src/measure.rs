//! Timestamped on/off observations of a pump.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::PumpError;

/// A single observation of the pump state.
///
/// `is_on` describes the state *starting at* `time`; it holds until the next
/// measure in time order overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measure {
    time: DateTime<Utc>,
    is_on: bool,
}

impl Measure {
    /// Create a measure from its instant and state.
    #[must_use]
    pub const fn new(time: DateTime<Utc>, is_on: bool) -> Self {
        Self { time, is_on }
    }

    /// Shorthand for a measure that switches the pump on.
    #[must_use]
    pub const fn on(time: DateTime<Utc>) -> Self {
        Self::new(time, true)
    }

    /// Shorthand for a measure that switches the pump off.
    #[must_use]
    pub const fn off(time: DateTime<Utc>) -> Self {
        Self::new(time, false)
    }

    /// Instant at which the observation was taken.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Whether the pump is on from this instant onwards.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_on { "on" } else { "off" };
        write!(
            f,
            "{} {}",
            self.time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            state
        )
    }
}

fn parse_state(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parses an event-log line of the form `<RFC 3339 instant> <state>`.
///
/// Accepted states are `on`/`off`, `true`/`false` and `1`/`0`, matched
/// case-insensitively.
///
/// ```
/// use pump_types::Measure;
///
/// let m: Measure = "2022-01-20T08:00:02Z off".parse().unwrap();
/// assert!(!m.is_on());
/// assert_eq!(m.to_string(), "2022-01-20T08:00:02Z off");
/// ```
impl FromStr for Measure {
    type Err = PumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(ts), Some(state), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PumpError::invalid_arg(format!(
                "expected `<instant> <state>`, got {s:?}"
            )));
        };
        let time = DateTime::parse_from_rfc3339(ts)?.with_timezone(&Utc);
        let is_on = parse_state(state)
            .ok_or_else(|| PumpError::invalid_arg(format!("unknown pump state {state:?}")))?;
        Ok(Self::new(time, is_on))
    }
}
