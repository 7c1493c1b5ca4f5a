use pump::{UnknownStartPolicy, UsageCalculator, Window};
use pump_demos::common::{at, hms, sample_measures, sample_window};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,pump=trace,pump_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
        .try_init();

    let measures = sample_measures();
    let calc = UsageCalculator::new();

    let usage = calc.usage_in(&measures, sample_window());
    tracing::info!(usage = %hms(usage), "sample window");

    // Starts before any measure: logged as unprocessable
    let early = Window::new(at(5, 0, 0), at(6, 0, 0));
    let usage = calc.usage_in(&measures, early);
    tracing::info!(usage = %hms(usage), "window before data");

    let lenient = UsageCalculator::builder()
        .unknown_start(UnknownStartPolicy::AssumeOff)
        .build();
    let usage = lenient.usage_in(&measures, early);
    tracing::info!(usage = %hms(usage), "window before data, assuming off");
}
