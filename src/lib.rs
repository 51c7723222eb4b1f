//! Pondus - this-or-that voting
//!
//! A terminal voting card: two options, one question, one vote per card,
//! with animated tallies once the vote is in. Also ships a small local poll
//! catalog driven from the command line.

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod config;
pub mod poll;
pub mod util;
pub mod vote;

// Common error types
#[derive(Debug, Error)]
pub enum PondusError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Poll catalog persistence error
    #[error("Persistence error: {0}")]
    Persistence(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Poll creation input rejected
    #[error("Invalid poll: {0}")]
    Validation(String),
    #[error("Poll {0} not found")]
    PollNotFound(u64),
    #[error("Poll {0} is no longer active")]
    PollInactive(u64),
    #[error("Poll {0} results are not available yet")]
    PollStillActive(u64),
    #[error("{voter} has already voted on poll {poll_id}")]
    AlreadyVoted { poll_id: u64, voter: String },
    #[error("Option {option_id} does not belong to poll {poll_id}")]
    InvalidOption { poll_id: u64, option_id: u64 },
    #[error("{user} is not the owner of poll {poll_id}")]
    NotOwner { poll_id: u64, user: String },
}

impl From<serde_json::Error> for PondusError {
    fn from(err: serde_json::Error) -> Self {
        PondusError::Persistence(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for PondusError {
    fn from(err: toml::de::Error) -> Self {
        PondusError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for PondusError {
    fn from(err: toml::ser::Error) -> Self {
        PondusError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for pondus operations
pub type Result<T> = std::result::Result<T, PondusError>;

/// Error handling utilities
pub mod error {
    use super::PondusError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &PondusError) -> String {
        match error {
            PondusError::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check permissions on the pondus data directory.".to_string()
            }
            PondusError::Config(msg) => {
                format!("Configuration error: {}. Check your pondus.toml.", msg)
            }
            PondusError::Persistence(_) => {
                "Failed to read or write the poll catalog. Check disk space and permissions."
                    .to_string()
            }
            PondusError::Validation(msg) => format!("{}.", msg),
            PondusError::PollNotFound(_) => "Poll not found.".to_string(),
            PondusError::PollInactive(_) => "Poll is no longer active.".to_string(),
            PondusError::PollStillActive(_) => {
                "Poll results are not available until the poll is closed.".to_string()
            }
            PondusError::AlreadyVoted { .. } => {
                "You have already voted on this poll.".to_string()
            }
            PondusError::InvalidOption { .. } => "Invalid voting option.".to_string(),
            PondusError::NotOwner { .. } => "Only the poll owner can close the poll.".to_string(),
            _ => error.to_string(),
        }
    }

    /// Process exit status: 2 for rejected input, 1 for everything else
    pub fn exit_code(error: &PondusError) -> i32 {
        if is_user_error(error) {
            2
        } else {
            1
        }
    }

    /// Whether the error was caused by the caller's input rather than the environment
    pub fn is_user_error(error: &PondusError) -> bool {
        matches!(
            error,
            PondusError::Validation(_)
                | PondusError::PollNotFound(_)
                | PondusError::PollInactive(_)
                | PondusError::PollStillActive(_)
                | PondusError::AlreadyVoted { .. }
                | PondusError::InvalidOption { .. }
                | PondusError::NotOwner { .. }
        )
    }
}

// Common types and constants
pub const APP_NAME: &str = "pondus";
pub const CONFIG_FILE: &str = "pondus.toml";
pub const POLLS_FILE: &str = "polls.json";
pub const LOG_FILE: &str = "pondus.log";
