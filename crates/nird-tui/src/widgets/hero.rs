//! Hero panel: campaign title and the entry call to action

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use nird_core::content::{
    HERO_BADGE, HERO_CONCEPT_CTA, HERO_CTA, HERO_PILLARS, HERO_SUBTITLE, HERO_TITLE,
};

use super::{centered_column, vertical_center, MAX_COLUMN_WIDTH};
use crate::theme::{icons, styles, Palette};

pub struct HeroPanel<'a> {
    palette: &'a Palette,
}

impl<'a> HeroPanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for HeroPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;

        let mut pillars = Vec::new();
        for (i, pillar) in HERO_PILLARS.iter().enumerate() {
            if i > 0 {
                pillars.push(Span::styled(format!(" {} ", icons::BULLET), styles::text_muted(p)));
            }
            pillars.push(Span::styled(*pillar, styles::accent(p)));
        }

        let lines = vec![
            Line::from(Span::styled(format!(" {} ", HERO_BADGE), styles::keybinding(p))),
            Line::default(),
            Line::from(Span::styled(HERO_TITLE, styles::title(p))),
            Line::from(Span::styled(HERO_SUBTITLE, styles::text_secondary(p))),
            Line::default(),
            Line::from(pillars),
            Line::default(),
            Line::from(Span::styled(
                format!("  {} →  ", HERO_CTA),
                styles::button(p, true),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(HERO_CONCEPT_CTA, styles::text_muted(p)),
                Span::styled(" (c)", styles::keybinding(p)),
            ]),
        ];

        let column = centered_column(area, MAX_COLUMN_WIDTH);
        let target = vertical_center(column, lines.len() as u16 + 1);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_hero_copy() {
        let mut term = TestTerminal::new();
        term.render_widget(HeroPanel::new(&DARK), term.area());

        assert!(term.buffer_contains("NIRD 2025"));
        assert!(term.buffer_contains("Le Village Numérique Résistant"));
        assert!(term.buffer_contains("Durable • Inclusif • Responsable"));
        assert!(term.buffer_contains("Découvrir la démarche"));
        assert!(term.buffer_contains("Comprendre le concept ergonomique"));
    }
}
