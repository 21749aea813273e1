//! Catalog module - manifest model, loading and generation
//!
//! # Architecture
//!
//! ```text
//! asset tree ──generate()──▶ gallery.json ──load()──▶ Catalog (Vec<Item>)
//!                             (HTTP or file)
//! ```
//!
//! - `types`: `Item`, `MediaType`, `Manifest`
//! - `loader`: one-shot manifest fetch with cache bypass
//! - `generate`: directory walk producing a manifest

pub mod error;
pub mod generate;
pub mod loader;
pub mod types;

pub use error::{GenerateError, LoadError};
pub use generate::{GenerateOptions, default_output, generate, write_manifest};
pub use loader::{DEFAULT_MANIFEST, ManifestSource, load, parse_manifest};
pub use types::{Catalog, Item, Manifest, MediaType};
