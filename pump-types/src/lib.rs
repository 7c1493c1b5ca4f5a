//! Pump-specific data model and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod measure;
mod window;

pub use config::{UnknownStartPolicy, UsageConfig};
pub use error::PumpError;
pub use measure::Measure;
pub use window::{Span, Window};
