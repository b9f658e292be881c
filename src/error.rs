//! Error types for callcenter-ticket
//!
//! The storage core never fails: absence is reported through `Option` and
//! `bool`. Everything here belongs to the layers around it (configuration,
//! console input, rendering).

use crate::core::TicketId;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CallCenterError>;

/// Errors raised by the shell, configuration and output layers
#[derive(Error, Debug)]
pub enum CallCenterError {
    /// I/O failure on the console streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The user typed something that could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A menu number outside the listed options
    #[error("Invalid option: {0}")]
    InvalidOption(u32),

    /// No ticket exists with the requested id
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: TicketId },

    /// The console input reached end of file
    #[error("Input stream closed")]
    InputClosed,
}

impl CallCenterError {
    /// Message suitable for showing to a desk operator
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TicketNotFound { .. } => "Ticket not found!".to_string(),
            Self::InvalidInput(msg) => format!("Invalid input. {msg}"),
            Self::InvalidOption(_) => "Invalid option. Try again.".to_string(),
            Self::Config(e) => format!("Failed to read configuration: {e}"),
            _ => self.to_string(),
        }
    }

    /// Hints that may help the operator recover
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Use 'View All Tickets' to see the ids currently on the desk".to_string(),
            ],
            Self::Config(_) => vec![
                "Check callcenter.toml or the file passed with --config".to_string(),
                "CALLCENTER_* environment variables override file settings".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether the shell can report the error and carry on
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidOption(_) | Self::TicketNotFound { .. }
        )
    }

    /// Whether the error came from configuration loading
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
