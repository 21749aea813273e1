//! Render sink abstraction
//!
//! The core never depends on a rendering technology; it hands `PageView`
//! snapshots to whatever implements [`RenderSink`].
//!
//! ```text
//! Session ──project()──▶ PageView ──render()──▶ RenderSink
//!                                               ├─ TerminalSink (ratatui)
//!                                               └─ RecordingSink (tests)
//! ```

use super::view::PageView;
use std::io;

/// Consumer of view snapshots. Rendering must not feed back into the session.
pub trait RenderSink {
    /// Reflect `view`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backing output fails.
    fn render(&mut self, view: &PageView) -> io::Result<()>;
}

/// Sink that keeps every view it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<PageView>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> &[PageView] {
        &self.frames
    }

    #[must_use]
    pub fn last(&self) -> Option<&PageView> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, view: &PageView) -> io::Result<()> {
        self.frames.push(view.clone());
        Ok(())
    }
}
