//! Input events consumed by the session

use crate::catalog::MediaType;
use crate::filter::Category;

/// One user interaction. Events are processed strictly in arrival order,
/// each to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Search field content changed (fires on every keystroke)
    SearchChanged(String),
    /// A category button was pressed
    CategorySelected(Category),
    /// A type toggle changed
    TypeToggled(MediaType, bool),
    /// A grid entry was activated; index into the filtered sequence
    OpenItem(usize),
    Next,
    Previous,
    Close,
    /// Collapsible side panel for narrow layouts
    ToggleSidebar,
}

/// What an event did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Criteria changed and the filtered sequence was recomputed
    Refiltered,
    /// The viewer cursor changed
    Navigated,
    /// Presentation-only state changed
    Presentation,
    /// Nothing changed (no-op or rejected request)
    Ignored,
}

impl Outcome {
    /// Whether the view needs to be re-projected
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
