//! Operations module
//!
//! Renders parsed flag tables as command lines and inspection dumps

pub mod dump;
pub mod to_command_line;

pub use dump::*;
pub use to_command_line::*;
