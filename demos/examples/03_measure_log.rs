use pump::{Measure, PumpError, UsageCalculator, Window};
use pump_demos::common::hms;

const LOG: &str = "\
2022-01-20T05:34:12Z on
2022-01-20T08:00:02Z off
2022-01-20T09:30:00+01:00 on
2022-01-20T10:15:00Z OFF
2022-01-20T11:45:00Z 1
";

fn main() -> Result<(), PumpError> {
    let measures = LOG
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::parse::<Measure>)
        .collect::<Result<Vec<_>, _>>()?;

    for m in &measures {
        println!("{m}");
    }

    let window = Window::try_new(
        "2022-01-20T06:00:00Z".parse()?,
        "2022-01-20T12:00:00Z".parse()?,
    )?;
    let usage = UsageCalculator::new().usage_in(&measures, window);
    println!("Total usage time : {}", hms(usage));

    // Malformed lines surface as errors instead of being skipped
    let bad = "2022-01-20T06:00:00Z running".parse::<Measure>();
    println!("Malformed line   : {}", bad.map_or_else(|e| e.to_string(), |m| m.to_string()));

    Ok(())
}
