//! Final panel: welcome message, headline figures and closing actions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use nird_app::FinalAction;
use nird_core::content::{
    FINAL_CREATE_ACCOUNT, FINAL_RESTART, FINAL_STATS, FINAL_TEXT, FINAL_TITLE,
};

use super::{centered_column, vertical_center, MAX_COLUMN_WIDTH};
use crate::theme::{styles, Palette};

/// Rows used by the panel's content
const CONTENT_HEIGHT: u16 = 12;

pub struct FinalPanel<'a> {
    palette: &'a Palette,
    focus: FinalAction,
    notice: Option<&'a str>,
}

impl<'a> FinalPanel<'a> {
    pub fn new(palette: &'a Palette, focus: FinalAction) -> Self {
        Self {
            palette,
            focus,
            notice: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for (stat, column) in FINAL_STATS.iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(stat.value, styles::accent_bold(p))),
                Line::from(Span::styled(stat.label, styles::text_muted(p))),
            ])
            .alignment(Alignment::Center)
            .render(*column, buf);
        }
    }
}

impl Widget for FinalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let column = vertical_center(centered_column(area, MAX_COLUMN_WIDTH), CONTENT_HEIGHT);

        let [title, text, stats, actions, notice] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(column);

        Paragraph::new(Line::from(Span::styled(FINAL_TITLE, styles::title(p))))
            .alignment(Alignment::Center)
            .render(title, buf);

        Paragraph::new(Line::from(Span::styled(FINAL_TEXT, styles::text_secondary(p))))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text, buf);

        self.render_stats(stats, buf);

        let create = self.focus == FinalAction::CreateAccount;
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("  {}  ", FINAL_CREATE_ACCOUNT),
                styles::button(p, create),
            )),
            Line::from(Span::styled(
                format!("  ↺ {}  ", FINAL_RESTART),
                styles::button(p, !create),
            )),
        ])
        .alignment(Alignment::Center)
        .render(actions, buf);

        if let Some(message) = self.notice {
            Paragraph::new(Line::from(Span::styled(message, styles::notice(p))))
                .alignment(Alignment::Center)
                .render(notice, buf);
        }
    }
}
