//! Galleria - browse a static media gallery from its manifest
//!
//! A gallery is a flat JSON manifest of image and PDF assets. This library
//! loads that manifest once, derives a category index from top-level
//! folders, and drives a small state machine: filter criteria in, a
//! filtered sequence and a modal viewer cursor out. Rendering is a pure
//! projection of that state handed to a [`render::RenderSink`].
//!
//! ```text
//! catalog::load ──▶ Session ──handle(Event)──▶ recompute ──▶ project ──▶ RenderSink
//!                     │                         (filter +
//!                     └── categories            cursor resync)
//! ```

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod filter;
pub mod logging;
pub mod output;
pub mod render;
pub mod session;
pub mod tui;
pub mod viewer;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GalleriaError {
    /// Manifest could not be loaded
    #[error(transparent)]
    Load(#[from] catalog::LoadError),
    /// Manifest could not be generated
    #[error("Manifest generation failed: {0}")]
    Generate(#[from] catalog::GenerateError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Terminal browser error
    #[error(transparent)]
    Ui(#[from] tui::UiError),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for galleria operations
pub type Result<T> = std::result::Result<T, GalleriaError>;
