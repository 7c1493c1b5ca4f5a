use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use proptest::prelude::*;
use pump::{Measure, Span, UnknownStartPolicy, UsageCalculator, UsageConfig, Window};

fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2022, 1, 20)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
        .and_utc()
}

fn window() -> Window {
    Window::new(at(6, 0, 0), at(16, 0, 0))
}

#[test]
fn default_calculator_uses_default_config() {
    let calc = UsageCalculator::new();
    assert_eq!(calc.config(), &UsageConfig::default());
    assert_eq!(calc, UsageCalculator::builder().build());
}

#[test]
fn builder_config_replaces_policy() {
    let cfg = UsageConfig {
        unknown_start: UnknownStartPolicy::AssumeOff,
    };
    let calc = UsageCalculator::builder().config(cfg).build();
    assert_eq!(calc.config().unknown_start, UnknownStartPolicy::AssumeOff);

    let calc = UsageCalculator::builder()
        .config(cfg)
        .unknown_start(UnknownStartPolicy::Unprocessable)
        .build();
    assert_eq!(calc.config().unknown_start, UnknownStartPolicy::Unprocessable);
}

#[test]
fn usage_in_matches_compute_usage() {
    let measures = [
        Measure::on(at(5, 0, 0)),
        Measure::off(at(7, 0, 0)),
        Measure::on(at(9, 30, 0)),
    ];
    let calc = UsageCalculator::new();
    let w = window();
    assert_eq!(
        calc.usage_in(&measures, w),
        calc.compute_usage(&measures, w.start, w.end)
    );
    assert_eq!(calc.usage_in(&measures, w), TimeDelta::minutes(60 + 390));
}

#[test]
fn policy_changes_unknown_start_outcome() {
    let measures = [Measure::on(at(8, 0, 0)), Measure::off(at(9, 0, 0))];
    let strict = UsageCalculator::new();
    let lenient = UsageCalculator::builder()
        .unknown_start(UnknownStartPolicy::AssumeOff)
        .build();

    assert_eq!(strict.usage_in(&measures, window()), TimeDelta::zero());
    assert_eq!(lenient.usage_in(&measures, window()), TimeDelta::hours(1));
    assert_eq!(
        lenient.on_spans(&measures, window()),
        vec![Span::new(at(8, 0, 0), at(9, 0, 0))]
    );
}

#[test]
fn breakdown_parts() {
    let measures = [
        Measure::on(at(6, 0, 0)),
        Measure::off(at(7, 0, 0)),
        Measure::on(at(8, 0, 0)),
        Measure::off(at(10, 0, 0)),
        Measure::on(at(15, 0, 0)),
    ];
    let b = UsageCalculator::new().breakdown(&measures, window());
    assert_eq!(b.leading, TimeDelta::hours(1));
    assert_eq!(b.between, TimeDelta::hours(2));
    assert_eq!(b.trailing, TimeDelta::hours(1));
    assert_eq!(b.total(), TimeDelta::hours(4));
}

#[test]
fn calculator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UsageCalculator>();

    let calc = UsageCalculator::new();
    let measures = vec![Measure::on(at(5, 0, 0))];
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let measures = measures.clone();
            std::thread::spawn(move || calc.usage_in(&measures, window()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), TimeDelta::hours(10));
    }
}

proptest! {
    #[test]
    fn never_exceeds_window(
        raw in proptest::collection::vec((0u32..24, 0u32..60, any::<bool>()), 0..60),
        a in 0u32..24,
        b in 0u32..24,
    ) {
        let measures: Vec<Measure> = raw.into_iter().map(|(h, m, on)| Measure::new(at(h, m, 0), on)).collect();
        let w = Window::new(at(a, 0, 0), at(b, 0, 0));
        let calc = UsageCalculator::new();
        let got = calc.usage_in(&measures, w);
        prop_assert!(got >= TimeDelta::zero());
        prop_assert!(got <= w.length());
    }
}
