//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + logo row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Navigation bar height: top border + progress row + bottom border
pub const NAV_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Logo, concept hint and theme toggle
    pub header: Rect,

    /// The panel for the current step
    pub body: Rect,

    /// Arrows, progress dots and step label
    pub nav: Rect,
}

/// Split the terminal into header, body and navigation bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(NAV_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        nav: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 18); // 24 - 3 - 3
        assert_eq!(layout.nav.y, 21);
        assert_eq!(layout.nav.height, 3);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.body.height + layout.nav.height,
            area.height
        );
        assert_eq!(layout.body.width, area.width);
    }
}
