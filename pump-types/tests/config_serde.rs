use pump_types::{Measure, UnknownStartPolicy, UsageConfig};

#[test]
fn usage_config_roundtrip() {
    let cfg = UsageConfig {
        unknown_start: UnknownStartPolicy::AssumeOff,
    };

    let json = serde_json::to_string(&cfg).expect("serialize usage config");
    let de: UsageConfig = serde_json::from_str(&json).expect("deserialize usage config");

    assert_eq!(de, cfg);
    assert!(matches!(de.unknown_start, UnknownStartPolicy::AssumeOff));
}

#[test]
fn usage_config_missing_policy_uses_default() {
    let de: UsageConfig = serde_json::from_str("{}").expect("deserialize empty config");
    assert_eq!(de.unknown_start, UnknownStartPolicy::Unprocessable);
    assert_eq!(de, UsageConfig::default());
}

#[test]
fn measure_roundtrip() {
    let m: Measure = "2022-01-20T05:34:12Z on".parse().expect("parse measure");

    let json = serde_json::to_string(&m).expect("serialize measure");
    assert!(json.contains("\"is_on\":true"));
    let de: Measure = serde_json::from_str(&json).expect("deserialize measure");

    assert_eq!(de, m);
}
