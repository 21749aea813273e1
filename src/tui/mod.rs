//! Terminal browser built on ratatui
//!
//! The terminal is one [`RenderSink`](crate::render::RenderSink): it draws
//! `PageView` snapshots and turns key and mouse input into session events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Action   ┌──────────────┐  project()  ┌──────────────┐
//! │  Crossterm   │──────────▶│   Session    │────────────▶│   PageView   │
//! │   (events)   │           │ (state mach.)│             └──────┬───────┘
//! └──────────────┘           └──────────────┘                    │
//!        ▲                                                       ▼
//!        │                    ┌────────────────────────────────────────┐
//!        └────────────────────│   TerminalSink (ratatui widgets)       │
//!                             └────────────────────────────────────────┘
//! ```

mod app;
pub mod error;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{TerminalSink, dispatch, draw, run};
pub use error::UiError;
pub use events::{Action, handle_key, handle_mouse};
pub use state::{ClickTarget, MessageLevel, StatusMessage, UiState};
pub use theme::Theme;
