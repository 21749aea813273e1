//! Filter module - category index and filter engine
//!
//! - `category`: derives `[ALL, ...top-level dirs]` from a catalog
//! - `criteria`: the category/type/query triple and the category match mode
//! - `engine`: stable filtering of the catalog against criteria
//!
//! Everything here is pure and total; nothing can fail.

pub mod category;
pub mod criteria;
pub mod engine;

pub use category::{ALL_SENTINEL, Category, derive_categories};
pub use criteria::{CategoryMatch, FilterCriteria, TypeFilters};
pub use engine::{FilterExt, apply_filters, haystack, matches};
