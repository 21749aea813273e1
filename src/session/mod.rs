//! Session module - the single owned state record and its event handler
//!
//! The session is exclusively owned by the event loop and passed by `&mut`
//! to [`Session::handle`]; there is no shared or global state.

mod event;
mod state;

pub use event::{Event, Outcome};
pub use state::{LoadState, Session, SessionOptions};
