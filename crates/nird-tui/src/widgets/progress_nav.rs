//! Navigation bar: arrows, progress dots and current step label

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use nird_app::view::progress_marks;
use nird_core::{Step, STEP_COUNT};

use crate::theme::{icons, styles, Palette};

pub struct ProgressNav<'a> {
    palette: &'a Palette,
    step: Step,
    show_key_hints: bool,
}

impl<'a> ProgressNav<'a> {
    pub fn new(palette: &'a Palette, step: Step) -> Self {
        Self {
            palette,
            step,
            show_key_hints: true,
        }
    }

    pub fn key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    fn progress_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::with_capacity(STEP_COUNT * 2 + 2);
        for (_, mark) in progress_marks(self.step) {
            let (glyph, style) = styles::progress_dot(p, mark);
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {}/{} · ", self.step.index() + 1, STEP_COUNT),
            styles::text_muted(p),
        ));
        spans.push(Span::styled(self.step.label(), styles::title(p)));
        Line::from(spans)
    }

    fn hints_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in [
            ("←/→", "naviguer"),
            ("Entrée", "valider"),
            ("t", "thème"),
            ("?", "concept"),
            ("q", "quitter"),
        ] {
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted(p)));
        }
        Line::from(spans)
    }
}

impl Widget for ProgressNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut block = styles::glass_block(p, false);
        if self.show_key_hints {
            block = block.title_bottom(self.hints_line().centered());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let prev = Line::from(vec![
            Span::raw(" "),
            Span::styled(icons::ARROW_LEFT, styles::nav_arrow(p, !self.step.is_first())),
            Span::styled(" Précédent", styles::nav_arrow(p, !self.step.is_first())),
        ]);
        let next = Line::from(vec![
            Span::styled("Suivant ", styles::nav_arrow(p, !self.step.is_last())),
            Span::styled(icons::ARROW_RIGHT, styles::nav_arrow(p, !self.step.is_last())),
            Span::raw(" "),
        ]);
        let progress = self.progress_line();

        let prev_width = prev.width() as u16;
        let next_width = next.width() as u16;
        let progress_width = progress.width() as u16;

        if prev_width + progress_width + next_width + 2 <= inner.width {
            buf.set_line(inner.x, inner.y, &prev, prev_width);
            let next_x = inner.x + inner.width - next_width;
            buf.set_line(next_x, inner.y, &next, next_width);
        }

        let progress_x = inner.x + inner.width.saturating_sub(progress_width) / 2;
        let remaining = inner.width - (progress_x - inner.x);
        buf.set_line(progress_x, inner.y, &progress, remaining);
    }
}
