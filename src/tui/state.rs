//! Terminal-only UI state
//!
//! Everything here is chrome around the session: the grid highlight, the
//! editable query line and status messages. Filter and viewer state live in
//! [`Session`](crate::session::Session) and are never duplicated here.

use crate::session::{Event, Session};
use ratatui::layout::{Position, Rect};

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// A message shown in the status bar until replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }
}

/// A clickable region from the last draw and the event it sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    pub area: Rect,
    pub event: Event,
}

impl ClickTarget {
    #[must_use]
    pub const fn new(area: Rect, event: Event) -> Self {
        Self { area, event }
    }
}

/// UI state of the terminal browser
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Query text as typed
    pub query: String,
    /// Byte offset of the edit cursor in `query`
    pub query_cursor: usize,
    /// Highlighted row in the grid
    pub highlight: usize,
    /// First visible grid row
    pub scroll_offset: usize,
    /// Number of grid rows that fit on screen
    pub visible_height: usize,
    /// Inner area of the grid from the last draw, for mouse hit-testing
    pub grid_area: Rect,
    /// Sidebar buttons, or the viewer controls while the viewer is open
    pub targets: Vec<ClickTarget>,
    pub status: Option<StatusMessage>,
    /// Manifest location, shown in the status bar
    pub source: Option<String>,
    pub should_exit: bool,
}

impl UiState {
    /// Seed the query line from the session's current criteria
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let query = session.criteria().search_query.clone();
        Self {
            query_cursor: query.len(),
            query,
            source: session.source().map(ToString::to_string),
            visible_height: 1,
            ..Self::default()
        }
    }

    /// Move highlight up
    pub const fn highlight_up(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
            self.adjust_scroll();
        }
    }

    /// Move highlight down within a grid of `len` rows
    pub const fn highlight_down(&mut self, len: usize) {
        if self.highlight + 1 < len {
            self.highlight += 1;
            self.adjust_scroll();
        }
    }

    pub const fn page_up(&mut self) {
        self.highlight = self.highlight.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self, len: usize) {
        let max = len.saturating_sub(1);
        self.highlight = (self.highlight + self.visible_height).min(max);
        self.adjust_scroll();
    }

    pub const fn jump_to_start(&mut self) {
        self.highlight = 0;
        self.adjust_scroll();
    }

    pub const fn jump_to_end(&mut self, len: usize) {
        self.highlight = len.saturating_sub(1);
        self.adjust_scroll();
    }

    /// Put the highlight on `index` (used to follow the viewer)
    pub const fn highlight_at(&mut self, index: usize) {
        self.highlight = index;
        self.adjust_scroll();
    }

    /// Keep the highlight inside a grid of `len` rows
    pub const fn clamp(&mut self, len: usize) {
        if self.highlight >= len {
            self.highlight = len.saturating_sub(1);
        }
        if self.scroll_offset > self.highlight {
            self.scroll_offset = self.highlight;
        }
        self.adjust_scroll();
    }

    /// Keep the highlight visible in the viewport
    const fn adjust_scroll(&mut self) {
        let height = if self.visible_height == 0 { 1 } else { self.visible_height };
        if self.highlight < self.scroll_offset {
            self.scroll_offset = self.highlight;
        } else if self.highlight >= self.scroll_offset + height {
            self.scroll_offset = self.highlight + 1 - height;
        }
    }

    /// Grid row under a terminal cell, if any
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let area = self.grid_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - area.y);
        (index < len).then_some(index)
    }

    /// Event of the click target under a terminal cell, if any
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<&Event> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .find(|target| target.area.contains(position))
            .map(|target| &target.event)
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev);
        self.query_cursor = prev;
        true
    }

    /// Delete the character under the cursor
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        true
    }

    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query; returns whether anything was removed
    pub fn query_clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        self.query_cursor = 0;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(height: usize) -> UiState {
        UiState {
            visible_height: height,
            ..UiState::default()
        }
    }

    #[test]
    fn test_highlight_navigation() {
        let mut ui = state(3);
        ui.highlight_up();
        assert_eq!(ui.highlight, 0);

        for _ in 0..10 {
            ui.highlight_down(5);
        }
        assert_eq!(ui.highlight, 4);
        assert_eq!(ui.scroll_offset, 2);

        ui.page_up();
        assert_eq!(ui.highlight, 1);
        assert_eq!(ui.scroll_offset, 1);

        ui.jump_to_end(5);
        assert_eq!(ui.highlight, 4);
        ui.jump_to_start();
        assert_eq!((ui.highlight, ui.scroll_offset), (0, 0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut ui = state(3);
        ui.jump_to_end(10);
        ui.clamp(2);
        assert_eq!(ui.highlight, 1);
        assert!(ui.scroll_offset <= 1);

        ui.clamp(0);
        assert_eq!((ui.highlight, ui.scroll_offset), (0, 0));
    }

    #[test]
    fn test_row_at() {
        let mut ui = state(4);
        ui.grid_area = Rect::new(10, 5, 40, 4);

        assert_eq!(ui.row_at(12, 5, 10), Some(0));
        assert_eq!(ui.row_at(12, 8, 10), Some(3));
        assert_eq!(ui.row_at(12, 8, 2), None);
        assert_eq!(ui.row_at(5, 6, 10), None);
        assert_eq!(ui.row_at(12, 9, 10), None);

        ui.scroll_offset = 3;
        assert_eq!(ui.row_at(12, 6, 10), Some(4));
    }

    #[test]
    fn test_target_at() {
        let mut ui = state(1);
        ui.targets = vec![
            ClickTarget::new(Rect::new(2, 4, 10, 1), Event::Close),
            ClickTarget::new(Rect::new(2, 5, 10, 1), Event::Next),
        ];

        assert_eq!(ui.target_at(2, 4), Some(&Event::Close));
        assert_eq!(ui.target_at(11, 5), Some(&Event::Next));
        assert_eq!(ui.target_at(12, 5), None);
        assert_eq!(ui.target_at(5, 6), None);
    }

    #[test]
    fn test_query_editing_multibyte() {
        let mut ui = state(1);
        for c in "fuji山".chars() {
            ui.query_push(c);
        }
        assert_eq!(ui.query, "fuji山");

        ui.query_cursor_left();
        ui.query_cursor_left();
        assert!(ui.query_backspace());
        assert_eq!(ui.query, "fui山");
        assert!(ui.query_delete());
        assert_eq!(ui.query, "fu山");
        assert!(ui.query_delete());
        assert_eq!(ui.query, "fu");
        assert!(!ui.query_delete());

        ui.query_cursor_right();
        assert!(ui.query_clear());
        assert!(!ui.query_backspace());
        assert!(!ui.query_clear());
    }
}
