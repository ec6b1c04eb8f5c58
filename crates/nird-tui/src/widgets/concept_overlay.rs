//! Concept overlay: modal explaining the progressive-disclosure design
//!
//! The copy is taller than a standard 80x24 terminal, so the modal scrolls.
//! Lines are wrapped here rather than by `Paragraph` so the wrapped height is
//! known and the scroll offset can be bounded.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use nird_app::OverlayScroll;
use nird_core::content::{
    OVERLAY_FOOTER, OVERLAY_HEADING, OVERLAY_PROBLEM, OVERLAY_TITLE, PRINCIPLES, VISION_NOTE,
    VISION_NOTE_TITLE,
};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use super::wrap_line;
use crate::theme::{icons, styles, Palette};

const MODAL_WIDTH: u16 = 76;
const MODAL_HEIGHT: u16 = 30;

pub struct ConceptOverlay<'a> {
    palette: &'a Palette,
}

impl<'a> ConceptOverlay<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![
            Line::from(Span::styled(OVERLAY_HEADING, styles::accent_bold(p))),
            Line::from(Span::styled(OVERLAY_PROBLEM, styles::text_secondary(p))),
            Line::default(),
        ];
        for (i, principle) in PRINCIPLES.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), styles::keybinding(p)),
                Span::styled(principle.title, styles::title(p)),
                Span::styled(format!(" : {}", principle.detail), styles::text_primary(p)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(VISION_NOTE_TITLE, styles::title(p))));
        for paragraph in VISION_NOTE {
            lines.push(Line::from(Span::styled(paragraph, styles::text_secondary(p))));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(OVERLAY_FOOTER, styles::accent(p))));
        lines
    }

    fn scroll_hint(&self, scroll: &OverlayScroll) -> Line<'static> {
        let p = self.palette;
        let mark = |shown: bool, glyph: &'static str| {
            if shown {
                Span::styled(glyph, styles::accent(p))
            } else {
                Span::styled(glyph, styles::text_muted(p))
            }
        };
        Line::from(vec![
            Span::raw(" "),
            mark(scroll.has_more_above(), icons::MORE_ABOVE),
            mark(scroll.has_more_below(), icons::MORE_BELOW),
            Span::styled(" ↑↓", styles::keybinding(p)),
            Span::styled(" défiler ", styles::text_muted(p)),
        ])
    }
}

impl StatefulWidget for ConceptOverlay<'_> {
    type State = OverlayScroll;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut OverlayScroll) {
        let p = self.palette;
        dim_background(buf, area, p);

        // Leave room for the shadow
        let bounds = Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(1),
            area.height.saturating_sub(1),
        );
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, bounds);
        render_shadow(buf, modal, p);
        clear_area(buf, modal);

        let inner = styles::modal_block(p).inner(modal);
        let content = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );

        let rows: Vec<Line<'static>> = self
            .lines()
            .into_iter()
            .flat_map(|line| wrap_line(line, content.width as usize))
            .collect();
        scroll.update_content_size(rows.len(), content.height as usize);

        let mut block = styles::modal_block(p)
            .title(Line::from(Span::styled(
                format!(" {} ", OVERLAY_TITLE),
                styles::title(p),
            )))
            .title_bottom(
                Line::from(vec![
                    Span::styled(" Échap", styles::keybinding(p)),
                    Span::styled(" pour fermer ", styles::text_muted(p)),
                ])
                .right_aligned(),
            );
        if scroll.total_lines > scroll.visible_lines {
            block = block.title_bottom(self.scroll_hint(scroll));
        }
        block.render(modal, buf);

        let visible: Vec<Line<'static>> = rows
            .into_iter()
            .skip(scroll.offset)
            .take(content.height as usize)
            .collect();
        Paragraph::new(visible).render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    fn render(term: &mut TestTerminal, scroll: &mut OverlayScroll) {
        let area = term.area();
        term.draw_with(|frame| {
            frame.render_stateful_widget(ConceptOverlay::new(&DARK), area, scroll)
        });
    }

    #[test]
    fn test_overlay_copy_on_tall_terminal() {
        let mut term = TestTerminal::with_size(100, 40);
        let mut scroll = OverlayScroll::default();
        render(&mut term, &mut scroll);

        assert!(term.buffer_contains("Concept Ergonomique"));
        assert!(term.buffer_contains("L'Interface Progressivement Révélée"));
        assert!(term.buffer_contains("1. Contextualité"));
        assert!(term.buffer_contains("5. Accessibilité native"));
        assert!(term.buffer_contains("Note de vision ergonomique"));
        assert!(term.buffer_contains("Vous êtes"));
        assert!(term.buffer_contains("pour fermer"));
    }

    #[test]
    fn test_tall_terminal_has_nothing_to_scroll() {
        let mut term = TestTerminal::with_size(100, 40);
        let mut scroll = OverlayScroll::default();
        render(&mut term, &mut scroll);

        assert!(scroll.total_lines <= scroll.visible_lines);
        assert!(!term.buffer_contains("défiler"));
    }

    #[test]
    fn test_standard_terminal_opens_at_top_with_more_below() {
        let mut term = TestTerminal::new();
        let mut scroll = OverlayScroll::default();
        render(&mut term, &mut scroll);

        assert!(term.buffer_contains("L'Interface Progressivement Révélée"));
        assert!(term.buffer_contains("1. Contextualité"));
        assert!(term.buffer_contains("pour fermer"));
        assert!(term.buffer_contains("défiler"));
        assert!(!term.buffer_contains("Vous êtes"));
        assert!(scroll.has_more_below());
    }

    #[test]
    fn test_standard_terminal_scrolls_to_footer() {
        let mut term = TestTerminal::new();
        let mut scroll = OverlayScroll::default();
        render(&mut term, &mut scroll);

        scroll.scroll_to_bottom();
        render(&mut term, &mut scroll);

        assert!(term.buffer_contains("Vous êtes"));
        assert!(term.buffer_contains("Note de vision ergonomique"));
        assert!(!scroll.has_more_below());
        assert!(term.buffer_contains("pour fermer"));
    }

    #[test]
    fn test_line_by_line_scrolling_reaches_footer() {
        let mut term = TestTerminal::new();
        let mut scroll = OverlayScroll::default();
        render(&mut term, &mut scroll);

        let mut steps = 0;
        while scroll.has_more_below() {
            scroll.scroll_down(1);
            render(&mut term, &mut scroll);
            steps += 1;
            assert!(steps < 100, "scrolling never reached the end");
        }
        assert!(term.buffer_contains("Vous êtes"));
        assert_eq!(steps, scroll.total_lines - scroll.visible_lines);
    }
}
