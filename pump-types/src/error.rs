use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pump workspace.
///
/// Usage computation never fails; this type only surfaces from input parsing
/// and strict constructors such as [`crate::Window::try_new`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PumpError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with provided data (malformed log lines, missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl PumpError {
    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}

impl From<chrono::ParseError> for PumpError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}
