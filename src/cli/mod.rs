//! Command-line interface module
//!
//! Handles the binary's own options and the commands they drive

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
