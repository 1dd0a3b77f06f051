//! Report formatting for terminal output and the TUI equation panel.

pub mod format;

pub use format::*;
