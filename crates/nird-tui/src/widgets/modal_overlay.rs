//! Modal overlay utilities: centring, background dimming and drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use nird_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so the modal stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default()
        .fg(palette.text_muted)
        .bg(palette.shadow)
        .add_modifier(Modifier::DIM);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow to the right of and below `modal_rect`.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);

    for y in modal_rect.y.saturating_add(1)..=bottom_y {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
    for x in modal_rect.x.saturating_add(1)..=right_x {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset the cells of `area` before drawing modal content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(40, 20, area), area);
    }

    #[test]
    fn test_centered_rect_with_offset() {
        let area = Rect::new(10, 5, 60, 20);
        assert_eq!(centered_rect(20, 10, area), Rect::new(30, 10, 20, 10));
    }

    #[test]
    fn test_dim_background_styles_cells() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &DARK);

        assert_eq!(buf[(0, 0)].bg, DARK.shadow);
        assert_eq!(buf[(3, 1)].fg, DARK.text_muted);
    }

    #[test]
    fn test_shadow_on_right_and_bottom() {
        let area = Rect::new(0, 0, 10, 6);
        let mut buf = Buffer::empty(area);
        let modal = Rect::new(2, 1, 4, 3);
        render_shadow(&mut buf, modal, &DARK);

        assert_eq!(buf[(6, 2)].bg, DARK.shadow);
        assert_eq!(buf[(3, 4)].bg, DARK.shadow);
        // Top-left corner of the modal untouched
        assert_ne!(buf[(2, 1)].bg, DARK.shadow);
    }

    #[test]
    fn test_shadow_outside_buffer_is_ignored() {
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, area, &DARK);
    }
}
