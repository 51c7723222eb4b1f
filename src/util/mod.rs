//! Utility functions module
//!
//! Label formatting and logging setup shared by the TUI and the CLI.

pub mod format;
pub mod logging;

// Re-export commonly used functions
pub use format::{format_percent, round_percent};
