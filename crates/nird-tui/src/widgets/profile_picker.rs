//! Profile picker: three selectable cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use nird_core::content::{ProfileCard, PROFILE_CARDS, PROFILE_SUBTITLE, PROFILE_TITLE};
use nird_core::Profile;

use super::{centered_column, truncate_with_ellipsis};
use crate::theme::{icons, styles, Palette};

const CARD_HEIGHT: u16 = 3;
const CARD_WIDTH: u16 = 60;

pub struct ProfilePicker<'a> {
    palette: &'a Palette,
    focus: usize,
    selected: Option<Profile>,
}

impl<'a> ProfilePicker<'a> {
    pub fn new(palette: &'a Palette, focus: usize, selected: Option<Profile>) -> Self {
        Self {
            palette,
            focus,
            selected,
        }
    }

    fn render_card(&self, card: &ProfileCard, position: usize, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let focused = position == self.focus;

        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", position + 1),
                styles::button(p, focused),
            ),
            Span::styled(format!(" {} ", card.title), styles::title(p)),
        ]);
        let mut block = styles::glass_block(p, focused).title(title);
        if self.selected == Some(card.profile) {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {} Sélectionné ", icons::CHECK),
                    styles::accent_bold(p).fg(p.success),
                ))
                .right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let marker = if focused { icons::POINTER } else { " " };
        let description = truncate_with_ellipsis(
            card.description,
            inner.width.saturating_sub(3) as usize,
        );
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", marker), styles::accent_bold(p)),
            Span::styled(description, styles::text_secondary(p)),
        ]))
        .render(inner, buf);
    }
}

impl Widget for ProfilePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let column = centered_column(area, CARD_WIDTH);

        let [heading, cards, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(CARD_HEIGHT * PROFILE_CARDS.len() as u16),
            Constraint::Min(0),
        ])
        .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled(PROFILE_TITLE, styles::title(p))),
            Line::from(Span::styled(PROFILE_SUBTITLE, styles::text_secondary(p))),
        ])
        .alignment(Alignment::Center)
        .render(heading, buf);

        let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 3]).split(cards);
        for (position, card) in PROFILE_CARDS.iter().enumerate() {
            self.render_card(card, position, rows[position], buf);
        }
    }
}
