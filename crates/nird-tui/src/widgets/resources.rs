//! Resources panel: downloadable material cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use nird_core::content::{
    ResourceDescriptor, RESOURCES, RESOURCES_CTA, RESOURCES_SUBTITLE, RESOURCES_TITLE,
};

use unicode_width::UnicodeWidthStr;

use super::{centered_column, truncate_with_ellipsis};
use crate::theme::{icons, palette::accent_color, styles, Palette};

const CARD_HEIGHT: u16 = 3;
const CARD_WIDTH: u16 = 60;

pub struct ResourcesPanel<'a> {
    palette: &'a Palette,
}

impl<'a> ResourcesPanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    fn render_card(&self, resource: &ResourceDescriptor, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let accent = accent_color(resource.accent);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(p.card_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let meta = format!("  {} · {}", resource.media_type.label(), resource.size_label);
        let title_budget = (inner.width as usize).saturating_sub(meta.width() + 6);
        let line = Line::from(vec![
            Span::styled(icons::ACCENT_BAR, Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(resource.title, title_budget),
                styles::title(p),
            ),
            Span::styled(meta, styles::text_muted(p)),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);

        // Download marker is decorative only
        let marker = Line::from(Span::styled(
            format!("{} ", icons::DOWNLOAD),
            Style::default().fg(accent),
        ));
        let marker_x = inner.x + inner.width.saturating_sub(2);
        buf.set_line(marker_x, inner.y, &marker, 2);
    }
}

impl Widget for ResourcesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let column = centered_column(area, CARD_WIDTH);

        let [heading, cards, cta, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(CARD_HEIGHT * RESOURCES.len() as u16),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled(RESOURCES_TITLE, styles::title(p))),
            Line::from(Span::styled(RESOURCES_SUBTITLE, styles::text_secondary(p))),
        ])
        .alignment(Alignment::Center)
        .render(heading, buf);

        let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 3]).split(cards);
        for (resource, row) in RESOURCES.iter().zip(rows.iter()) {
            self.render_card(resource, *row, buf);
        }

        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                format!("  {} →  ", RESOURCES_CTA),
                styles::button(p, true),
            )),
        ])
        .alignment(Alignment::Center)
        .render(cta, buf);
    }
}
