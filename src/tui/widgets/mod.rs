//! Ratatui widgets for the terminal browser

mod category_nav;
mod help_bar;
mod media_grid;
mod search_bar;
mod status_bar;
mod viewer_modal;

pub use category_nav::CategoryNav;
pub use help_bar::{HelpBar, KeyHint};
pub use media_grid::MediaGrid;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use viewer_modal::ViewerModal;

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = usize::from(buf.area.width);
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}
