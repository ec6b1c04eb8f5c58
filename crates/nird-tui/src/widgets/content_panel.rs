//! Content panel: the bundle for the selected profile

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use nird_core::content::{ContentBundle, CONTENT_CTA};

use super::{centered_column, vertical_center, MAX_COLUMN_WIDTH};
use crate::theme::{styles, Palette};

pub struct ContentPanel<'a> {
    palette: &'a Palette,
    bundle: &'a ContentBundle,
}

impl<'a> ContentPanel<'a> {
    pub fn new(palette: &'a Palette, bundle: &'a ContentBundle) -> Self {
        Self { palette, bundle }
    }
}

impl Widget for ContentPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let column = centered_column(area, MAX_COLUMN_WIDTH);

        let mut lines = vec![
            Line::from(Span::styled(self.bundle.title, styles::accent_bold(p))).centered(),
            Line::default(),
        ];
        for (i, item) in self.bundle.items.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), styles::keybinding(p)),
                Span::styled(*item, styles::text_primary(p)),
            ]));
        }
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                format!("  {} →  ", CONTENT_CTA),
                styles::button(p, true),
            ))
            .centered(),
        );

        let target = vertical_center(column, lines.len() as u16 + 2);
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use nird_core::{bundle_for, Profile};

    #[test]
    fn test_renders_bundle_items_numbered() {
        let bundle = bundle_for(Profile::Teacher);
        let mut term = TestTerminal::new();
        term.render_widget(ContentPanel::new(&DARK, bundle), term.area());

        assert!(term.buffer_contains(bundle.title));
        assert!(term.buffer_contains("1. "));
        assert!(term.buffer_contains("4. "));
        assert!(term.buffer_contains("Voir les ressources"));
    }

    #[test]
    fn test_each_profile_has_its_own_title() {
        for profile in Profile::ALL {
            let bundle = bundle_for(profile);
            let mut term = TestTerminal::new();
            term.render_widget(ContentPanel::new(&DARK, bundle), term.area());
            assert!(term.buffer_contains(bundle.title), "{}", profile);
        }
    }
}
