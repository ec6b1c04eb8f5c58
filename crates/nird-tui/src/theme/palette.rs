//! Colour palettes for the dark and light themes.
//!
//! The dark palette follows the campaign's deep-blue night sky, the light one
//! its pale daytime variant. Widgets never name colours directly; they read
//! them from the `Palette` selected by the session's `ThemeMode`.

use nird_core::{Rgb, ThemeMode};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_alt: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Foreground on top of an accent background
    pub contrast_fg: Color,

    // --- Status ---
    pub success: Color,
    pub notice: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(15, 12, 41),
    card_bg: Color::Rgb(30, 27, 75),
    popup_bg: Color::Rgb(36, 36, 62),
    border_dim: Color::Rgb(67, 56, 120),
    border_active: Color::Rgb(102, 126, 234),
    accent: Color::Rgb(102, 126, 234),
    accent_alt: Color::Rgb(240, 147, 251),
    text_primary: Color::Rgb(241, 245, 249),
    text_secondary: Color::Rgb(196, 181, 253),
    text_muted: Color::Rgb(120, 113, 168),
    contrast_fg: Color::Rgb(255, 255, 255),
    success: Color::Rgb(74, 222, 128),
    notice: Color::Rgb(250, 204, 21),
    shadow: Color::Rgb(5, 4, 16),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(238, 242, 255),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(250, 250, 255),
    border_dim: Color::Rgb(199, 210, 254),
    border_active: Color::Rgb(79, 70, 229),
    accent: Color::Rgb(79, 70, 229),
    accent_alt: Color::Rgb(192, 38, 211),
    text_primary: Color::Rgb(30, 27, 75),
    text_secondary: Color::Rgb(67, 56, 202),
    text_muted: Color::Rgb(100, 116, 139),
    contrast_fg: Color::Rgb(255, 255, 255),
    success: Color::Rgb(22, 163, 74),
    notice: Color::Rgb(180, 83, 9),
    shadow: Color::Rgb(203, 213, 225),
};

impl Palette {
    pub fn for_theme(theme: ThemeMode) -> &'static Palette {
        match theme {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}

/// Terminal colour for a content accent
pub fn accent_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme() {
        assert_eq!(Palette::for_theme(ThemeMode::Dark), &DARK);
        assert_eq!(Palette::for_theme(ThemeMode::Light), &LIGHT);
    }

    #[test]
    fn test_themes_differ_in_background() {
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }

    #[test]
    fn test_accent_color() {
        assert_eq!(accent_color(Rgb(102, 126, 234)), Color::Rgb(102, 126, 234));
    }
}
