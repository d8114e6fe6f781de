//! Error handling module
//!
//! Defines the command-layer error type and its exit codes

pub mod types;

pub use types::*;
