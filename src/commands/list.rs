//! List command - print the items that pass the filters

use super::Result;
use crate::cli::OutputFormat;
use crate::output;
use crate::session::Session;
use std::io::Write;

/// Execute the list command
pub fn execute<W: Write>(
    session: &Session,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let items = session.filtered();

    match format {
        OutputFormat::Json => writeln!(out, "{}", output::items_json(items)?)?,
        OutputFormat::Text => {
            if items.is_empty() {
                if !quiet {
                    writeln!(out, "No items match the current filters.")?;
                }
                return Ok(());
            }
            for item in items {
                writeln!(out, "{}", output::item_line(item, quiet))?;
            }
            if !quiet {
                writeln!(out, "{}", output::summary(items.len(), session.catalog().len()))?;
            }
        }
    }
    Ok(())
}
