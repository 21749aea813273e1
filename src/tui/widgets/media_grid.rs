//! Media grid widget
//!
//! Terminals cannot show thumbnails, so the grid is a list of rows, one per
//! entry of the filtered sequence, with the type badge standing in for the
//! preview image.

use crate::render::{GridEntry, PageView};
use crate::tui::state::UiState;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Grid of filtered items, or the load status when there is nothing to list
pub struct MediaGrid<'a> {
    view: &'a PageView,
    ui: &'a UiState,
    theme: &'a Theme,
}

impl<'a> MediaGrid<'a> {
    #[must_use]
    pub const fn new(view: &'a PageView, ui: &'a UiState, theme: &'a Theme) -> Self {
        Self { view, ui, theme }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(
                " {} · {} ",
                self.view.breadcrumbs, self.view.result_stats
            ))
    }

    /// Area available for rows once the border is drawn
    #[must_use]
    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    fn render_entry(&self, entry: &GridEntry, is_highlighted: bool) -> ListItem<'a> {
        let cursor = if is_highlighted { ">" } else { " " };
        let open = if entry.is_open { "●" } else { " " };

        let name_style = if is_highlighted {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor, self.theme.cursor_style()),
            Span::styled(open, self.theme.active_style()),
            Span::raw(" "),
            Span::styled(
                format!("{:<5}", entry.badge),
                self.theme.badge_style(entry.media_type),
            ),
            Span::raw(" "),
            Span::styled(entry.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(entry.dir.clone(), self.theme.dimmed_style()),
        ]);

        if is_highlighted {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }

    fn render_message(&self, text: &str, error: bool, inner: Rect, buf: &mut Buffer) {
        let style = if error {
            self.theme.error_style()
        } else {
            self.theme.dimmed_style()
        };
        Paragraph::new(Line::styled(text.to_string(), style))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for MediaGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if let Some(error) = &self.view.load_error {
            self.render_message(error, true, inner, buf);
            return;
        }
        if self.view.loading {
            self.render_message("Loading gallery…", false, inner, buf);
            return;
        }
        if self.view.grid.is_empty() {
            self.render_message("No items match the current filters", false, inner, buf);
            return;
        }

        let start = self.ui.scroll_offset;
        let end = (start + usize::from(inner.height)).min(self.view.grid.len());

        let items: Vec<ListItem> = self.view.grid[start.min(end)..end]
            .iter()
            .map(|entry| self.render_entry(entry, entry.index == self.ui.highlight))
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ViewOptions, project};
    use crate::session::{Event, Session, SessionOptions};
    use crate::testing::sample_catalog;
    use crate::tui::widgets::buffer_lines;

    fn draw(session: &Session, ui: &UiState, height: u16) -> Vec<String> {
        let view = project(session, &ViewOptions::default());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, height);
        let mut buf = Buffer::empty(area);
        MediaGrid::new(&view, ui, &theme).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_rows_and_title() {
        let session = Session::with_catalog(sample_catalog(), SessionOptions::default());
        let lines = draw(&session, &UiState::default(), 10);

        assert!(lines[0].contains("All · 7 items"));
        assert!(lines[1].contains(">  IMAGE fuji.jpg  Trips/Japan"));
        assert!(lines[3].contains("   PDF   manual.pdf  Docs"));
    }

    #[test]
    fn test_scrolled_window_and_open_marker() {
        let mut session = Session::with_catalog(sample_catalog(), SessionOptions::default());
        session.handle(Event::OpenItem(4));
        let ui = UiState {
            highlight: 4,
            scroll_offset: 3,
            visible_height: 2,
            ..UiState::default()
        };

        let lines = draw(&session, &ui, 4);
        assert!(lines[1].contains("rome.jpg"));
        assert!(lines[2].contains(">● PDF   2019.pdf  TripsArchive"));
    }

    #[test]
    fn test_empty_and_error_states() {
        let mut session = Session::with_catalog(sample_catalog(), SessionOptions::default());
        session.handle(Event::SearchChanged("nothing-here".into()));
        let lines = draw(&session, &UiState::default(), 5);
        assert!(lines[0].contains("0 items"));
        assert!(lines[1].contains("No items match"));

        let mut failed = Session::default();
        failed.apply_load(Err(crate::catalog::parse_manifest("[").unwrap_err()));
        let lines = draw(&failed, &UiState::default(), 5);
        assert!(lines[1].contains("Failed to load gallery manifest"));

        let lines = draw(&Session::default(), &UiState::default(), 5);
        assert!(lines[1].contains("Loading gallery"));
    }
}
