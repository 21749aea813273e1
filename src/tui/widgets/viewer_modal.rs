//! Viewer modal widget for the open item

use crate::render::{ViewerMedia, ViewerView};
use crate::session::Event;
use crate::tui::state::ClickTarget;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const PREV_LABEL: &str = "◀ prev";
const CLOSE_LABEL: &str = "✕ close";
const NEXT_LABEL: &str = "next ▶";
const CONTROL_GAP: u16 = 3;

/// Screen regions of the viewer's pointer controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerControls {
    pub previous: Rect,
    pub close: Rect,
    pub next: Rect,
}

impl ViewerControls {
    /// Center the controls on the last row of `inner`
    fn within(inner: Rect) -> Self {
        let [prev_width, close_width, next_width] =
            [PREV_LABEL, CLOSE_LABEL, NEXT_LABEL].map(label_width);
        let total = prev_width + close_width + next_width + 2 * CONTROL_GAP;
        let y = inner.bottom().saturating_sub(1);
        let mut x = inner.x + inner.width.saturating_sub(total) / 2;

        let mut place = |width: u16| {
            let rect = Rect::new(x, y, width, 1).intersection(inner);
            x = x.saturating_add(width + CONTROL_GAP);
            rect
        };

        Self {
            previous: place(prev_width),
            close: place(close_width),
            next: place(next_width),
        }
    }

    #[must_use]
    pub fn click_targets(&self) -> Vec<ClickTarget> {
        vec![
            ClickTarget::new(self.previous, Event::Previous),
            ClickTarget::new(self.close, Event::Close),
            ClickTarget::new(self.next, Event::Next),
        ]
    }
}

fn label_width(label: &str) -> u16 {
    u16::try_from(Span::raw(label).width()).unwrap_or(u16::MAX)
}

/// Modal describing the item open in the viewer
pub struct ViewerModal<'a> {
    viewer: &'a ViewerView,
    theme: &'a Theme,
}

impl<'a> ViewerModal<'a> {
    #[must_use]
    pub const fn new(viewer: &'a ViewerView, theme: &'a Theme) -> Self {
        Self { viewer, theme }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(format!(" {} / {} ", self.viewer.position, self.viewer.total))
            .title_alignment(Alignment::Center)
    }

    /// Where the prev/close/next controls land when drawn into `area`
    #[must_use]
    pub fn controls(area: Rect) -> ViewerControls {
        let modal_area = Self::centered_rect(70, 60, area);
        ViewerControls::within(Block::bordered().inner(modal_area))
    }

    /// Calculate centered area for the modal
    #[must_use]
    pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn field(&self, label: &'a str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), self.theme.dimmed_style()),
            Span::raw(value),
        ])
    }

    fn render_controls(&self, controls: ViewerControls, buf: &mut Buffer) {
        let style_for = |enabled: bool| {
            if enabled {
                self.theme.cursor_style()
            } else {
                self.theme.dimmed_style()
            }
        };
        let buttons = [
            (controls.previous, PREV_LABEL, style_for(self.viewer.has_previous)),
            (controls.close, CLOSE_LABEL, self.theme.cursor_style()),
            (controls.next, NEXT_LABEL, style_for(self.viewer.has_next)),
        ];
        for (rect, label, style) in buttons {
            Line::styled(label, style).render(rect, buf);
        }
    }
}

impl Widget for ViewerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(70, 60, area);
        Clear.render(modal_area, buf);

        let block = self.block();
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let controls = ViewerControls::within(inner);
        let details = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let (kind, src) = match &self.viewer.media {
            ViewerMedia::Image { src } => ("Image", src.as_str()),
            ViewerMedia::PdfEmbed { src } => ("PDF document", src.as_str()),
        };

        let lines = vec![
            Line::styled(
                self.viewer.caption.as_str(),
                self.theme.active_style().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            self.field("Type", kind),
            self.field("Source", src),
            self.field("Download", self.viewer.download_name.as_str()),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(details, buf);
        self.render_controls(controls, buf);
    }
}
