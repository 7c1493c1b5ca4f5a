//! Shared fixtures for the pump demo programs.

pub mod common;
