use chrono::{DateTime, Utc};

use crate::{Measure, Window};

/// Infer the pump state at `at` from a time-ordered series.
///
/// The state is the `is_on` flag of the last measure with `time <= at`; among
/// measures sharing that timestamp the last one in series order wins.
/// Returns `None` when no measure is at or before `at`, i.e. the state cannot
/// be derived from data.
///
/// `sorted` must be in non-decreasing time order (see
/// [`sort_measures`](crate::sort_measures)).
///
/// ```
/// use chrono::{DateTime, Utc};
/// use pump_core::{Measure, state_at};
///
/// fn t(sec: i64) -> DateTime<Utc> { DateTime::from_timestamp(sec, 0).unwrap() }
///
/// let series = [Measure::on(t(0)), Measure::off(t(60))];
/// assert_eq!(state_at(&series, t(-1)), None);
/// assert_eq!(state_at(&series, t(0)), Some(true));
/// assert_eq!(state_at(&series, t(59)), Some(true));
/// assert_eq!(state_at(&series, t(60)), Some(false));
/// ```
#[must_use]
pub fn state_at(sorted: &[Measure], at: DateTime<Utc>) -> Option<bool> {
    let upto = sorted.partition_point(|m| m.time() <= at);
    upto.checked_sub(1).map(|i| sorted[i].is_on())
}

/// Slice of a time-ordered series lying strictly inside the window.
///
/// Measures exactly at `start` or `end` are excluded. An empty window yields
/// an empty slice.
#[must_use]
pub fn in_window(sorted: &[Measure], window: Window) -> &[Measure] {
    if window.is_empty() {
        return &[];
    }
    let lo = sorted.partition_point(|m| m.time() <= window.start);
    let hi = sorted.partition_point(|m| m.time() < window.end);
    &sorted[lo..hi.max(lo)]
}
