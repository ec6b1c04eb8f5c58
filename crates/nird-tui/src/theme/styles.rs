//! Semantic style builders.

use nird_app::view::ProgressMark;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::icons;
use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent_alt)
}

pub fn notice(p: &Palette) -> Style {
    Style::default().fg(p.notice).add_modifier(Modifier::ITALIC)
}

// --- Buttons ---

/// Primary call to action; the focused one is filled with the accent
pub fn button(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(p.contrast_fg)
            .bg(p.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.accent)
    }
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}

// --- Progress dots ---

/// Glyph and style for one progress dot
pub fn progress_dot(p: &Palette, mark: ProgressMark) -> (&'static str, Style) {
    match mark {
        ProgressMark::Completed => (icons::DOT_COMPLETED, Style::default().fg(p.success)),
        ProgressMark::Active => (icons::DOT_ACTIVE, accent_bold(p)),
        ProgressMark::Upcoming => (icons::DOT_UPCOMING, text_muted(p)),
    }
}

/// Navigation arrow style; disabled arrows are dimmed
pub fn nav_arrow(p: &Palette, enabled: bool) -> Style {
    if enabled {
        accent_bold(p)
    } else {
        text_muted(p).add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_focused_button_is_filled() {
        assert_eq!(button(&DARK, true).bg, Some(DARK.accent));
        assert_eq!(button(&DARK, false).bg, None);
    }

    #[test]
    fn test_progress_dots() {
        let (glyph, style) = progress_dot(&LIGHT, ProgressMark::Active);
        assert_eq!(glyph, icons::DOT_ACTIVE);
        assert_eq!(style.fg, Some(LIGHT.accent));

        let (glyph, _) = progress_dot(&LIGHT, ProgressMark::Completed);
        assert_eq!(glyph, icons::DOT_COMPLETED);
    }

    #[test]
    fn test_disabled_arrow_is_dim() {
        assert!(nav_arrow(&DARK, false)
            .add_modifier
            .contains(Modifier::DIM));
        assert_eq!(nav_arrow(&DARK, true).fg, Some(DARK.accent));
    }
}
