//! Category navigation and type filter panel

use crate::render::{CategoryButton, TypeToggle};
use crate::session::Event;
use crate::tui::state::ClickTarget;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Side panel listing categories and the type checkboxes
pub struct CategoryNav<'a> {
    categories: &'a [CategoryButton],
    type_toggles: &'a [TypeToggle],
    theme: &'a Theme,
}

impl<'a> CategoryNav<'a> {
    #[must_use]
    pub const fn new(
        categories: &'a [CategoryButton],
        type_toggles: &'a [TypeToggle],
        theme: &'a Theme,
    ) -> Self {
        Self {
            categories,
            type_toggles,
            theme,
        }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Categories ")
    }

    /// Rows a pointer can press: one per category, then one per type toggle
    ///
    /// Rows clipped by `area` are left out.
    #[must_use]
    pub fn click_targets(&self, area: Rect) -> Vec<ClickTarget> {
        let inner = self.block().inner(area);
        let row = |offset: usize| {
            let y = u16::try_from(offset).ok().and_then(|o| inner.y.checked_add(o))?;
            (y < inner.bottom()).then(|| Rect::new(inner.x, y, inner.width, 1))
        };

        let categories = self.categories.iter().enumerate().filter_map(|(i, button)| {
            row(i).map(|area| ClickTarget::new(area, Event::CategorySelected(button.category.clone())))
        });

        // blank line and the "Types" heading sit between the two groups
        let first_toggle = self.categories.len() + 2;
        let toggles = self.type_toggles.iter().enumerate().filter_map(|(i, toggle)| {
            row(first_toggle + i).map(|area| {
                ClickTarget::new(area, Event::TypeToggled(toggle.media_type, !toggle.enabled))
            })
        });

        categories.chain(toggles).collect()
    }

    fn category_line(&self, button: &'a CategoryButton) -> Line<'a> {
        if button.active {
            Line::from(vec![
                Span::styled("▸ ", self.theme.cursor_style()),
                Span::styled(button.label.as_str(), self.theme.active_style()),
            ])
        } else {
            Line::from(vec![Span::raw("  "), Span::raw(button.label.as_str())])
        }
    }

    fn toggle_line(&self, toggle: TypeToggle, key: &'a str) -> Line<'a> {
        let (mark, style) = if toggle.enabled {
            ("[x] ", self.theme.badge_style(toggle.media_type))
        } else {
            ("[ ] ", self.theme.dimmed_style())
        };
        Line::from(vec![
            Span::styled(mark, style),
            Span::styled(toggle.media_type.badge(), style),
            Span::styled(format!(" {key}"), self.theme.dimmed_style()),
        ])
    }
}

impl Widget for CategoryNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = self
            .categories
            .iter()
            .map(|button| self.category_line(button))
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::styled("Types", self.theme.dimmed_style()));
        for (toggle, key) in self.type_toggles.iter().zip(["F2", "F3"]) {
            lines.push(self.toggle_line(*toggle, key));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MediaType;
    use crate::filter::Category;
    use crate::tui::widgets::buffer_lines;

    fn fixture() -> (Vec<CategoryButton>, Vec<TypeToggle>) {
        let categories = vec![
            CategoryButton {
                category: Category::All,
                label: "All".into(),
                active: false,
            },
            CategoryButton {
                category: Category::Named("Docs".into()),
                label: "Docs".into(),
                active: true,
            },
        ];
        let toggles = vec![
            TypeToggle {
                media_type: MediaType::Image,
                enabled: true,
            },
            TypeToggle {
                media_type: MediaType::Pdf,
                enabled: false,
            },
        ];
        (categories, toggles)
    }

    #[test]
    fn test_marks_active_category_and_toggles() {
        let (categories, toggles) = fixture();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 24, 9);
        let mut buf = Buffer::empty(area);

        CategoryNav::new(&categories, &toggles, &theme).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("  All"));
        assert!(lines[2].contains("▸ Docs"));
        assert!(lines[4].contains("Types"));
        assert!(lines[5].contains("[x] IMAGE F2"));
        assert!(lines[6].contains("[ ] PDF F3"));
    }

    #[test]
    fn test_click_targets_line_up_with_rows() {
        let (categories, toggles) = fixture();
        let theme = Theme::default();
        let area = Rect::new(0, 3, 24, 9);
        let nav = CategoryNav::new(&categories, &toggles, &theme);

        let targets = nav.click_targets(area);
        let rows: Vec<(u16, &Event)> = targets.iter().map(|t| (t.area.y, &t.event)).collect();
        assert_eq!(
            rows,
            vec![
                (4, &Event::CategorySelected(Category::All)),
                (5, &Event::CategorySelected(Category::Named("Docs".into()))),
                (8, &Event::TypeToggled(MediaType::Image, false)),
                (9, &Event::TypeToggled(MediaType::Pdf, true)),
            ]
        );
        assert!(targets.iter().all(|t| t.area.x == 1 && t.area.width == 22));

        let mut buf = Buffer::empty(area);
        nav.render(area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[5].contains("[x] IMAGE"));
    }

    #[test]
    fn test_click_targets_skip_clipped_rows() {
        let (categories, toggles) = fixture();
        let theme = Theme::default();
        let nav = CategoryNav::new(&categories, &toggles, &theme);

        // two inner rows: only the category buttons fit
        let targets = nav.click_targets(Rect::new(0, 0, 24, 4));
        assert_eq!(targets.len(), 2);
    }
}
