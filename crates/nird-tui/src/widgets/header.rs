//! Header bar: logo, concept hint and theme toggle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use nird_core::content::{LOGO_BADGE, LOGO_TEXT};
use nird_core::ThemeMode;

use crate::theme::{icons, styles, Palette};

pub struct MainHeader<'a> {
    palette: &'a Palette,
    theme: ThemeMode,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, theme: ThemeMode) -> Self {
        Self { palette, theme }
    }

    fn logo_line(&self) -> Line<'static> {
        let p = self.palette;
        Line::from(vec![
            Span::raw(" "),
            Span::styled(LOGO_TEXT, styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", LOGO_BADGE),
                Style::default()
                    .fg(p.contrast_fg)
                    .bg(p.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn hints_line(&self) -> Line<'static> {
        let p = self.palette;
        let theme_label = if self.theme.is_dark() {
            "Clair"
        } else {
            "Sombre"
        };
        Line::from(vec![
            Span::styled("[", styles::text_muted(p)),
            Span::styled("?", styles::keybinding(p)),
            Span::styled("] Concept  ", styles::text_muted(p)),
            Span::styled("[", styles::text_muted(p)),
            Span::styled("t", styles::keybinding(p)),
            Span::styled("] ", styles::text_muted(p)),
            Span::styled(icons::theme_toggle(self.theme), styles::accent(p)),
            Span::styled(format!(" {} ", theme_label), styles::text_secondary(p)),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let logo = self.logo_line();
        let hints = self.hints_line();
        let logo_width = logo.width() as u16;
        let hints_width = hints.width() as u16;

        buf.set_line(inner.x, inner.y, &logo, inner.width);

        // Hints are right-aligned and dropped when they would overlap the logo
        if logo_width + hints_width + 2 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
