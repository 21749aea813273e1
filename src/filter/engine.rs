//! Filter engine
//!
//! A stable filter over the catalog: the result is an order-preserving
//! subsequence, and identical inputs always give identical output.

use super::criteria::{CategoryMatch, FilterCriteria};
use super::category::Category;
use crate::catalog::Item;

/// Criteria with the query trimmed and lowercased once per recompute
struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    query: String,
    mode: CategoryMatch,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria, mode: CategoryMatch) -> Self {
        Self {
            criteria,
            query: criteria.normalized_query(),
            mode,
        }
    }

    fn matches(&self, item: &Item) -> bool {
        if !self.criteria.type_enabled(item.media_type) {
            return false;
        }

        if let Category::Named(category) = &self.criteria.active_category
            && !self.mode.matches(&item.dir, category)
        {
            return false;
        }

        self.query.is_empty() || haystack(item).contains(&self.query)
    }
}

/// Lowercase search text for an item: name, path, dir and extension
#[must_use]
pub fn haystack(item: &Item) -> String {
    format!("{} {} {} {}", item.name, item.path, item.dir, item.ext).to_lowercase()
}

/// Whether a single item passes `criteria`
#[must_use]
pub fn matches(item: &Item, criteria: &FilterCriteria, mode: CategoryMatch) -> bool {
    Matcher::new(criteria, mode).matches(item)
}

/// Compute the filtered sequence for `criteria`
#[must_use]
pub fn apply_filters(catalog: &[Item], criteria: &FilterCriteria, mode: CategoryMatch) -> Vec<Item> {
    let matcher = Matcher::new(criteria, mode);
    let filtered: Vec<Item> = catalog
        .iter()
        .filter(|item| matcher.matches(item))
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered {} of {} items (category={}, types={:?}, query={:?})",
        filtered.len(),
        catalog.len(),
        criteria.active_category,
        criteria.type_filters,
        matcher.query
    );

    filtered
}

/// Extension trait adding filtering to item slices
///
/// ```ignore
/// use galleria::filter::FilterExt;
///
/// let shown = catalog.filtered_by(&criteria, CategoryMatch::Prefix);
/// ```
pub trait FilterExt {
    /// See [`apply_filters`]
    fn filtered_by(&self, criteria: &FilterCriteria, mode: CategoryMatch) -> Vec<Item>;
}

impl FilterExt for [Item] {
    fn filtered_by(&self, criteria: &FilterCriteria, mode: CategoryMatch) -> Vec<Item> {
        apply_filters(self, criteria, mode)
    }
}
