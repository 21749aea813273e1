//! Output formatting for CLI display
//!
//! Text helpers return plain `String`s with `colored` styling applied;
//! `colored` drops the escapes by itself when stdout is not a terminal.

use crate::catalog::{Item, MediaType};
use crate::filter::Category;
use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Colored type badge
#[must_use]
pub fn badge(media_type: MediaType) -> ColoredString {
    let text = format!("{:<5}", media_type.badge());
    match media_type {
        MediaType::Image => text.green().bold(),
        MediaType::Pdf => text.magenta().bold(),
    }
}

/// Format an item for display
#[must_use]
pub fn item_line(item: &Item, quiet: bool) -> String {
    if quiet {
        item.path.clone()
    } else if item.dir.is_empty() {
        format!("  {} {}", badge(item.media_type), item.name)
    } else {
        format!(
            "  {} {} {}",
            badge(item.media_type),
            item.name,
            format!("({})", item.dir).dimmed()
        )
    }
}

/// Format a category with the number of items it would show
#[must_use]
pub fn category_line(category: &Category, all_label: &str, count: usize, quiet: bool) -> String {
    let label = category.display_label(all_label);
    if quiet {
        label.to_string()
    } else if category.is_all() {
        format!("  {} ({count} item(s))", label.bold())
    } else {
        format!("  {label} ({count} item(s))")
    }
}

/// Summary line printed after a listing
#[must_use]
pub fn summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} item(s)").dimmed().to_string()
}

/// One category in JSON output
#[derive(Debug, Serialize)]
pub struct CategoryRecord<'a> {
    pub name: String,
    pub label: &'a str,
    pub count: usize,
}

/// Pretty JSON for a slice of items
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn items_json(items: &[Item]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

/// Pretty JSON for category records
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn categories_json(records: &[CategoryRecord<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
