//! Categories command - print the derived category index

use super::Result;
use crate::cli::OutputFormat;
use crate::filter::{FilterCriteria, apply_filters};
use crate::output::{self, CategoryRecord};
use crate::session::Session;
use std::io::Write;

/// Execute the categories command
pub fn execute<W: Write>(
    session: &Session,
    all_label: &str,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let mode = session.options().category_match;
    let records: Vec<CategoryRecord> = session
        .categories()
        .iter()
        .map(|category| {
            let criteria = FilterCriteria::default().with_category(category.clone());
            CategoryRecord {
                name: category.to_string(),
                label: category.display_label(all_label),
                count: apply_filters(session.catalog(), &criteria, mode).len(),
            }
        })
        .collect();

    match format {
        OutputFormat::Json => writeln!(out, "{}", output::categories_json(&records)?)?,
        OutputFormat::Text => {
            for (category, record) in session.categories().iter().zip(&records) {
                writeln!(
                    out,
                    "{}",
                    output::category_line(category, all_label, record.count, quiet)
                )?;
            }
        }
    }
    Ok(())
}
