//! Browse command - interactive terminal browser

use super::Result;
use crate::render::ViewOptions;
use crate::session::Session;
use crate::tui;

/// Execute the browse command
///
/// A failed manifest load is not an error here; the browser shows it inline.
pub fn execute(session: Session, options: &ViewOptions) -> Result<()> {
    let session = tui::run(session, options)?;
    tracing::debug!(
        "Browser closed with {} of {} item(s) visible",
        session.filtered().len(),
        session.catalog().len()
    );
    Ok(())
}
