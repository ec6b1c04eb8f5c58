//! Theme system for the wizard
//!
//! - `palette` — dark and light colour sets
//! - `styles` — semantic style builders over a palette
//! - `icons` — glyph constants

pub mod icons;
pub mod palette;
pub mod styles;

pub use palette::Palette;
