//! Glyphs used across widgets. All are plain Unicode so no patched font is
//! required.

/// Shown in dark mode: switching goes to the light theme
pub const SUN: &str = "☀";
/// Shown in light mode: switching goes to the dark theme
pub const MOON: &str = "☾";

pub const ARROW_LEFT: &str = "◀";
pub const ARROW_RIGHT: &str = "▶";
pub const MORE_ABOVE: &str = "▲";
pub const MORE_BELOW: &str = "▼";

pub const DOT_ACTIVE: &str = "◉";
pub const DOT_COMPLETED: &str = "●";
pub const DOT_UPCOMING: &str = "○";

pub const CHECK: &str = "✓";
pub const DOWNLOAD: &str = "⬇";
pub const ACCENT_BAR: &str = "▌";
pub const POINTER: &str = "›";
pub const BULLET: &str = "•";

/// Theme toggle glyph for the current theme
pub fn theme_toggle(theme: nird_core::ThemeMode) -> &'static str {
    if theme.is_dark() {
        SUN
    } else {
        MOON
    }
}
