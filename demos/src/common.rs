use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use pump::{Measure, Window};

/// Instant on the demo day, 2022-01-20, in UTC.
///
/// # Panics
/// Panics if the given time of day is out of range.
#[must_use]
pub fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2022, 1, 20)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid demo time of day")
        .and_utc()
}

/// Eight unordered measures, some of them outside the demo window.
#[must_use]
pub fn sample_measures() -> Vec<Measure> {
    vec![
        Measure::off(at(8, 0, 2)),
        Measure::on(at(11, 54, 48)),
        Measure::on(at(8, 30, 56)),
        Measure::on(at(7, 40, 5)),
        Measure::on(at(10, 29, 27)),
        Measure::off(at(8, 24, 30)),
        Measure::on(at(5, 34, 12)),
        Measure::on(at(13, 28, 56)),
    ]
}

/// The 06:00 to 12:00 demo window.
#[must_use]
pub fn sample_window() -> Window {
    Window::new(at(6, 0, 0), at(12, 0, 0))
}

/// Render a duration as `HH:MM:SS`.
#[must_use]
pub fn hms(d: TimeDelta) -> String {
    let secs = d.num_seconds();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
