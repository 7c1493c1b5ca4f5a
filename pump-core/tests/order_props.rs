use chrono::{DateTime, Utc};
use proptest::prelude::*;
use pump_core::{Measure, is_time_ordered, sort_measures};

fn arb_ts() -> impl Strategy<Value = DateTime<Utc>> {
    // Narrow range so duplicate timestamps show up regularly
    (-50i64..50i64).prop_map(|s| DateTime::from_timestamp(s * 60, 0).unwrap())
}

fn arb_measure() -> impl Strategy<Value = Measure> {
    (arb_ts(), any::<bool>()).prop_map(|(ts, on)| Measure::new(ts, on))
}

proptest! {
    #[test]
    fn sort_is_time_ordered(measures in proptest::collection::vec(arb_measure(), 0..200)) {
        let sorted = sort_measures(&measures);
        prop_assert!(is_time_ordered(&sorted));
        prop_assert_eq!(sorted.len(), measures.len());
    }

    #[test]
    fn sort_is_stable_on_equal_times(measures in proptest::collection::vec(arb_measure(), 0..200)) {
        // Tag by input position and check that ties keep their relative order
        let tagged: Vec<(usize, Measure)> = measures.iter().copied().enumerate().collect();
        let sorted = sort_measures(&measures);

        let mut expected = tagged;
        expected.sort_by(|a, b| a.1.time().cmp(&b.1.time()).then(a.0.cmp(&b.0)));
        let expected: Vec<Measure> = expected.into_iter().map(|(_, m)| m).collect();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn sort_leaves_input_untouched(measures in proptest::collection::vec(arb_measure(), 0..100)) {
        let before = measures.clone();
        let _ = sort_measures(&measures);
        prop_assert_eq!(measures, before);
    }

    #[test]
    fn sort_idempotent(measures in proptest::collection::vec(arb_measure(), 0..200)) {
        let once = sort_measures(&measures);
        let twice = sort_measures(&once);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn empty_and_single_are_ordered() {
    assert!(is_time_ordered(&[]));
    let t = DateTime::from_timestamp(0, 0).unwrap();
    assert!(is_time_ordered(&[Measure::on(t)]));
    assert!(sort_measures(&[]).is_empty());
}
