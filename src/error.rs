//! Error types for the terminal shell
//!
//! Settings persistence and input parsing fail with [`ShellError`]. Engine
//! errors pass through unchanged.

use chess_rules::ChessRulesError;
use thiserror::Error;

/// Errors that can occur in the shell
#[derive(Error, Debug)]
pub enum ShellError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// No platform config directory and no explicit settings path
    #[error("No configuration directory available")]
    NoConfigDir,

    /// Square name that does not address a board square
    #[error("'{name}' is not a square on this board")]
    InvalidSquare { name: String },

    /// Line that is not a known command
    #[error("Unknown command '{input}', type 'help' for the command list")]
    UnknownCommand { input: String },

    /// Promotion letter other than q, r, b or n
    #[error("'{choice}' is not a promotion choice, use q, r, b or n")]
    InvalidPromotionChoice { choice: String },

    /// Rejected by the rules engine
    #[error(transparent)]
    Rules(#[from] ChessRulesError),
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
