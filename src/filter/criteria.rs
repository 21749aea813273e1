//! Filter criteria
//!
//! The three user-controlled inputs to the filter engine. Mutated only in
//! response to input events; any mutation triggers a recompute.

use super::category::Category;
use crate::catalog::MediaType;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How an active category is compared against an item's `dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    /// Raw string prefix: `"Foo"` matches `"Foo/x"` and also `"FooBar"`
    #[default]
    Prefix,
    /// Segment-aware: `dir == category` or `dir` starts with `category/`
    Segment,
}

impl CategoryMatch {
    /// Whether `dir` falls under the named category
    #[must_use]
    pub fn matches(self, dir: &str, category: &str) -> bool {
        match self {
            Self::Prefix => dir.starts_with(category),
            Self::Segment => dir
                .strip_prefix(category)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        }
    }
}

/// Set of enabled media types. Empty is legal and matches nothing.
pub type TypeFilters = BTreeSet<MediaType>;

/// Current filter state for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub active_category: Category,
    pub type_filters: TypeFilters,
    /// Raw query as typed; trimmed and lowercased at match time
    pub search_query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            active_category: Category::All,
            type_filters: MediaType::ALL.into_iter().collect(),
            search_query: String::new(),
        }
    }
}

impl FilterCriteria {
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.active_category = category;
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = MediaType>) -> Self {
        self.type_filters = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Enable or disable one media type. Returns whether the set changed.
    pub fn set_type(&mut self, media_type: MediaType, enabled: bool) -> bool {
        if enabled {
            self.type_filters.insert(media_type)
        } else {
            self.type_filters.remove(&media_type)
        }
    }

    #[must_use]
    pub fn type_enabled(&self, media_type: MediaType) -> bool {
        self.type_filters.contains(&media_type)
    }

    /// Normalized query used for matching (trimmed, lowercase)
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }
}
