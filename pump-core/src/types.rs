//! Re-export of foundational types from `pump-types`.
// Consolidated re-exports so downstream crates can depend on `pump-core` only

pub use pump_types::{Measure, PumpError, Span, UnknownStartPolicy, UsageConfig, Window};
