//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args. Non-interactive commands write to a caller-supplied writer.

pub mod browse;
pub mod categories;
pub mod generate;
pub mod list;

pub use browse::execute as browse;
pub use categories::execute as categories;
pub use generate::execute as generate;
pub use list::execute as list;

use crate::GalleriaError;

type Result<T> = std::result::Result<T, GalleriaError>;
