//! Status bar widget for messages and the manifest location

use crate::tui::state::{MessageLevel, StatusMessage};
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    /// Manifest location shown on the right
    source: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self {
            message,
            source: None,
            theme,
        }
    }

    #[must_use]
    pub const fn with_source(mut self, source: Option<&'a str>) -> Self {
        self.source = source;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Error => self.theme.error_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Info => "ℹ ",
            MessageLevel::Error => "✗ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        if let Some(source) = self.source {
            Paragraph::new(Line::styled(source, self.theme.dimmed_style()).right_aligned())
                .render(chunks[1], buf);
        }
    }
}
