//! Viewer module - the modal single-item viewer's cursor

pub mod cursor;

pub use cursor::{CursorError, ResyncPolicy, ViewerCursor};
