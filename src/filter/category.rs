//! Category index
//!
//! Categories are the distinct top-level `dir` segments of the catalog, in
//! first-seen order, behind the `ALL` sentinel.

use crate::catalog::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Wire/CLI spelling of the no-restriction sentinel
pub const ALL_SENTINEL: &str = "ALL";

/// A category selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// No category restriction
    #[default]
    All,
    /// A top-level directory segment
    Named(String),
}

impl Category {
    /// Build a category from user input; `"ALL"` maps to the sentinel
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_SENTINEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Label for display, with `all_label` standing in for the sentinel
    #[must_use]
    pub fn display_label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Self::All => all_label,
            Self::Named(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        if s == ALL_SENTINEL { Self::All } else { Self::Named(s) }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::All => ALL_SENTINEL.to_string(),
            Category::Named(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label(ALL_SENTINEL))
    }
}

/// Derive `[ALL, ...top-level segments in first-seen order]`
///
/// Items with an empty `dir` contribute nothing.
#[must_use]
pub fn derive_categories(catalog: &[Item]) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut categories = vec![Category::All];

    for top in catalog.iter().filter_map(Item::top_level_dir) {
        // A directory literally named "ALL" would collide with the sentinel
        if top != ALL_SENTINEL && seen.insert(top) {
            categories.push(Category::Named(top.to_string()));
        }
    }

    categories
}
