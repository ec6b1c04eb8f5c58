//! Custom widget components

mod concept_overlay;
mod content_panel;
mod final_panel;
mod header;
mod hero;
pub mod modal_overlay;
mod profile_picker;
mod progress_nav;
mod resources;

pub use concept_overlay::ConceptOverlay;
pub use content_panel::ContentPanel;
pub use final_panel::FinalPanel;
pub use header::MainHeader;
pub use hero::HeroPanel;
pub use profile_picker::ProfilePicker;
pub use progress_nav::ProgressNav;
pub use resources::ResourcesPanel;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a panel's content column gets on large terminals
pub const MAX_COLUMN_WIDTH: u16 = 72;

/// Truncate `text` to `max_width` display columns, ending with "..." when cut.
///
/// Widths are measured in terminal columns, so emoji and accented letters
/// count for what they occupy on screen.
///
/// # Examples
/// ```
/// # use nird_tui::widgets::truncate_with_ellipsis;
/// assert_eq!(truncate_with_ellipsis("Profil", 10), "Profil");
/// assert_eq!(truncate_with_ellipsis("Ressources disponibles", 10), "Ressour...");
/// assert_eq!(truncate_with_ellipsis("Accueil", 3), "...");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Word-wrap a styled line to `width` display columns.
///
/// Span styles carry over to the wrapped rows. Words wider than a whole row
/// are split at the column limit. An empty line stays one empty row, so the
/// result length is the number of rows the line occupies.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in line.spans {
        let style = span.style;
        for piece in span.content.split_inclusive(' ') {
            if used > 0 && used + piece.trim_end().width() > width {
                rows.push(finish_row(std::mem::take(&mut spans)));
                used = 0;
            }
            if used == 0 && piece.trim().is_empty() {
                continue;
            }

            let mut word = piece.to_string();
            while used == 0 && word.trim_end().width() > width {
                let (head, tail) = split_at_width(&word, width);
                rows.push(Line::from(Span::styled(head, style)));
                word = tail;
            }
            if word.is_empty() {
                continue;
            }
            used += word.width();
            spans.push(Span::styled(word, style));
        }
    }

    if !spans.is_empty() || rows.is_empty() {
        rows.push(finish_row(spans));
    }
    rows
}

fn finish_row(mut spans: Vec<Span<'static>>) -> Line<'static> {
    if let Some(last) = spans.last_mut() {
        let trimmed = last.content.trim_end().to_string();
        last.content = trimmed.into();
    }
    Line::from(spans)
}

/// Split `word` so the head fits in `width` columns (at least one char)
fn split_at_width(word: &str, width: usize) -> (String, String) {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if i > 0 && used + w > width {
            return (word[..i].to_string(), word[i..].to_string());
        }
        used += w;
    }
    (word.to_string(), String::new())
}

/// Horizontally centred column no wider than `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Sub-rect of `area` that vertically centres `content_height` rows
pub fn vertical_center(area: Rect, content_height: u16) -> Rect {
    let height = area.height.min(content_height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}
