//! Catalog error types
//!
//! - **`LoadError`**: the manifest could not be fetched, read or parsed. The
//!   session degrades to an empty catalog and shows the message inline.
//! - **`GenerateError`**: the manifest generator failed to walk the asset tree
//!   or write its output.

use thiserror::Error;

/// Errors raised while loading a manifest
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Manifest body is not valid JSON of the expected shape
    #[error("Malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Local manifest file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest location is neither a usable URL nor a path
    #[error("Invalid manifest source: {0}")]
    InvalidSource(String),
}

/// Errors raised while generating a manifest from a directory tree
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk asset tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for manifest loading
pub type Result<T> = std::result::Result<T, LoadError>;
