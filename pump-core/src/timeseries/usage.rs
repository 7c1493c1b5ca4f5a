use chrono::{DateTime, TimeDelta, Utc};

use crate::timeseries::order::sort_measures;
use crate::timeseries::state::{in_window, state_at};
use crate::{Measure, Span, UnknownStartPolicy, UsageConfig, Window};

/// On-time within a window, split by where it was accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageBreakdown {
    /// From `start` to the first in-window measure while the state inferred
    /// at `start` is on. When no measure lies inside the window this holds the
    /// projection of the start state over the whole window.
    pub leading: TimeDelta,
    /// Between consecutive in-window measures whose earlier one is on.
    pub between: TimeDelta,
    /// From the last in-window measure to `end` when that measure is on.
    pub trailing: TimeDelta,
}

impl UsageBreakdown {
    /// A breakdown with every part zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            leading: TimeDelta::zero(),
            between: TimeDelta::zero(),
            trailing: TimeDelta::zero(),
        }
    }

    /// Sum of all parts.
    #[must_use]
    pub fn total(&self) -> TimeDelta {
        self.leading + self.between + self.trailing
    }
}

impl Default for UsageBreakdown {
    fn default() -> Self {
        Self::zero()
    }
}

/// Resolved inputs of a window scan.
struct Scan<'a> {
    window: Window,
    start_on: bool,
    inside: &'a [Measure],
}

fn prepare<'a>(sorted: &'a [Measure], window: Window, cfg: &UsageConfig) -> Option<Scan<'a>> {
    if sorted.is_empty() || window.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "pump_core::timeseries::usage",
            measures = sorted.len(),
            start = %window.start,
            end = %window.end,
            "no data or empty window; usage is zero"
        );
        return None;
    }
    let start_on = match state_at(sorted, window.start) {
        Some(on) => on,
        None => match cfg.unknown_start {
            UnknownStartPolicy::AssumeOff => false,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "pump_core::timeseries::usage",
                    first = %sorted[0].time(),
                    start = %window.start,
                    "no measure at or before window start; usage is zero"
                );
                return None;
            }
        },
    };
    Some(Scan {
        window,
        start_on,
        inside: in_window(sorted, window),
    })
}

/// Compute the pump's on-time within `[start, end]` using the default
/// configuration.
///
/// Measures may be given in any order. The state between two observations is
/// the earlier observation's flag; the state at `start` is inferred from the
/// last measure at or before it. Degenerate inputs never fail:
///
/// - no measures, or `end <= start`: zero;
/// - no measure at or before `start`: zero, the state at `start` is unknown;
/// - no measure strictly inside the window: the state at `start` is projected
///   over the whole window.
///
/// ```
/// use chrono::{DateTime, TimeDelta, Utc};
/// use pump_core::{Measure, compute_usage};
///
/// fn h(hours: i64) -> DateTime<Utc> { DateTime::from_timestamp(hours * 3600, 0).unwrap() }
///
/// let measures = [Measure::off(h(1)), Measure::on(h(0))];
/// assert_eq!(compute_usage(&measures, h(0), h(10)), TimeDelta::hours(1));
/// assert_eq!(compute_usage(&measures, h(10), h(0)), TimeDelta::zero());
/// ```
#[must_use]
pub fn compute_usage(measures: &[Measure], start: DateTime<Utc>, end: DateTime<Utc>) -> TimeDelta {
    compute_usage_with(&UsageConfig::default(), measures, start, end)
}

/// Compute the pump's on-time within `[start, end]` under `cfg`.
#[must_use]
pub fn compute_usage_with(
    cfg: &UsageConfig,
    measures: &[Measure],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> TimeDelta {
    usage_breakdown(cfg, measures, Window::new(start, end)).total()
}

/// Compute the on-time within `window` split into leading, between and
/// trailing parts. The parts sum to [`compute_usage_with`].
#[must_use]
pub fn usage_breakdown(cfg: &UsageConfig, measures: &[Measure], window: Window) -> UsageBreakdown {
    let sorted = sort_measures(measures);
    let Some(scan) = prepare(&sorted, window, cfg) else {
        return UsageBreakdown::zero();
    };

    let (Some(first), Some(last)) = (scan.inside.first(), scan.inside.last()) else {
        return if scan.start_on {
            UsageBreakdown {
                leading: scan.window.length(),
                ..UsageBreakdown::zero()
            }
        } else {
            UsageBreakdown::zero()
        };
    };

    let leading = if scan.start_on {
        first.time() - scan.window.start
    } else {
        TimeDelta::zero()
    };
    let between = scan
        .inside
        .windows(2)
        .filter(|pair| pair[0].is_on())
        .fold(TimeDelta::zero(), |acc, pair| {
            acc + (pair[1].time() - pair[0].time())
        });
    let trailing = if last.is_on() {
        scan.window.end - last.time()
    } else {
        TimeDelta::zero()
    };

    UsageBreakdown {
        leading,
        between,
        trailing,
    }
}

fn push_span(spans: &mut Vec<Span>, start: DateTime<Utc>, end: DateTime<Utc>) {
    if start >= end {
        return;
    }
    if let Some(prev) = spans.last_mut() {
        if prev.end == start {
            prev.end = end;
            return;
        }
    }
    spans.push(Span::new(start, end));
}

/// Maximal intervals during which the pump was on, clipped to `window`.
///
/// Spans are disjoint, ordered, never empty, and their durations sum to the
/// usage computed for the same inputs.
#[must_use]
pub fn on_spans(cfg: &UsageConfig, measures: &[Measure], window: Window) -> Vec<Span> {
    let sorted = sort_measures(measures);
    let Some(scan) = prepare(&sorted, window, cfg) else {
        return vec![];
    };

    let mut spans = Vec::new();
    let mut open = scan.start_on.then_some(scan.window.start);
    for m in scan.inside {
        match (open, m.is_on()) {
            (None, true) => open = Some(m.time()),
            (Some(since), false) => {
                push_span(&mut spans, since, m.time());
                open = None;
            }
            _ => {}
        }
    }
    if let Some(since) = open {
        push_span(&mut spans, since, scan.window.end);
    }
    spans
}
