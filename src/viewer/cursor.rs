//! Viewer cursor state machine
//!
//! ```text
//!            open(i)                 next / previous (saturating)
//!  Closed ───────────▶ Open(i) ◀──────────────────────┐
//!    ▲                   │  └─────────────────────────┘
//!    └──── close() ──────┘
//! ```
//!
//! Invariant: `Open(i)` implies `i < len` of the filtered sequence the cursor
//! was last synchronized with. Transitions that take a length enforce it;
//! `resync` restores it after the sequence is recomputed.

use crate::catalog::Item;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid cursor request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("Index {index} is out of range for {len} item(s)")]
    OutOfRange { index: usize, len: usize },
}

/// What to do when the open item disappears from a recomputed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResyncPolicy {
    /// Keep the viewer open at the nearest valid index
    #[default]
    Clamp,
    /// Close the viewer
    Close,
}

/// Position of the modal viewer within the filtered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerCursor {
    #[default]
    Closed,
    Open(usize),
}

impl ViewerCursor {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Current index, `None` when closed
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open(i) => Some(i),
        }
    }

    /// Open the viewer at `index`
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if `index >= len`; the cursor is
    /// left unchanged.
    pub fn open(&mut self, index: usize, len: usize) -> Result<(), CursorError> {
        if index >= len {
            return Err(CursorError::OutOfRange { index, len });
        }
        *self = Self::Open(index);
        Ok(())
    }

    /// Advance by one, stopping at the last item. Returns whether it moved.
    pub fn next(&mut self, len: usize) -> bool {
        match *self {
            Self::Open(i) if i + 1 < len => {
                *self = Self::Open(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Step back by one, stopping at the first item. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        match *self {
            Self::Open(i) if i > 0 => {
                *self = Self::Open(i - 1);
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Re-establish the invariant after the filtered sequence changed
    ///
    /// `open_path` is the path of the item that was open before the
    /// recompute. If that item is still present the cursor follows it;
    /// otherwise an empty sequence closes the viewer and a non-empty one is
    /// handled by `policy`.
    pub fn resync(&mut self, open_path: Option<&str>, sequence: &[Item], policy: ResyncPolicy) {
        let Self::Open(index) = *self else {
            return;
        };

        if let Some(pos) = open_path.and_then(|p| sequence.iter().position(|item| item.path == p)) {
            *self = Self::Open(pos);
            return;
        }

        *self = match (sequence.len(), policy) {
            (0, _) | (_, ResyncPolicy::Close) => Self::Closed,
            (len, ResyncPolicy::Clamp) => Self::Open(index.min(len - 1)),
        };
    }
}
