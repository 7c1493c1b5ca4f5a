use pump::UsageCalculator;
use pump_demos::common::{at, hms, sample_measures, sample_window};

fn main() {
    let measures = sample_measures();
    let window = sample_window();

    let calc = UsageCalculator::new();
    let total = calc.compute_usage(&measures, window.start, window.end);
    println!("Total usage time : {}", hms(total));

    // Same figure by hand: on from the window start (inherited from 05:34:12)
    // until 08:00:02, then from 08:30:56 until the window end.
    let by_hand = (at(8, 0, 2) - window.start) + (window.end - at(8, 30, 56));
    println!("Total usage time : {}", hms(by_hand));

    assert_eq!(total, by_hand);
}
