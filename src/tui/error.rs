//! Terminal browser error types

use thiserror::Error;

/// Errors that can occur while running the terminal browser
#[derive(Debug, Error)]
pub enum UiError {
    /// Standard output is not an interactive terminal
    #[error("The browser needs an interactive terminal; try `galleria list` instead")]
    NotATerminal,

    /// IO error during terminal operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
