use crate::Measure;

/// Return a copy of `measures` sorted by time ascending.
///
/// The sort is stable: measures sharing a timestamp keep their input order.
/// The caller's slice is left untouched.
#[must_use]
pub fn sort_measures(measures: &[Measure]) -> Vec<Measure> {
    let mut sorted = measures.to_vec();
    sorted.sort_by_key(Measure::time);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "pump_core::timeseries::order",
        times = ?sorted.iter().map(Measure::time).collect::<Vec<_>>(),
        "sorted measures"
    );
    sorted
}

/// True when `measures` is in non-decreasing time order.
#[must_use]
pub fn is_time_ordered(measures: &[Measure]) -> bool {
    measures.windows(2).all(|w| w[0].time() <= w[1].time())
}
