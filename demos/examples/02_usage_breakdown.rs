use pump::{UnknownStartPolicy, UsageCalculator, Window};
use pump_demos::common::{at, hms, sample_measures, sample_window};

fn main() {
    let measures = sample_measures();
    let calc = UsageCalculator::new();

    let b = calc.breakdown(&measures, sample_window());
    println!("-- Breakdown 06:00-12:00 --");
    println!("leading  : {}", hms(b.leading));
    println!("between  : {}", hms(b.between));
    println!("trailing : {}", hms(b.trailing));
    println!("total    : {}", hms(b.total()));

    println!("-- On spans --");
    for span in calc.on_spans(&measures, sample_window()) {
        println!(
            "{} -> {} ({})",
            span.start.format("%H:%M:%S"),
            span.end.format("%H:%M:%S"),
            hms(span.duration())
        );
    }

    // The earliest measure is 05:34:12, so a window starting at 05:00 has no
    // derivable start state.
    let early = Window::new(at(5, 0, 0), at(9, 0, 0));
    let lenient = UsageCalculator::builder()
        .unknown_start(UnknownStartPolicy::AssumeOff)
        .build();
    println!("-- Window 05:00-09:00 --");
    println!("unprocessable : {}", hms(calc.usage_in(&measures, early)));
    println!("assume off    : {}", hms(lenient.usage_in(&measures, early)));
}
