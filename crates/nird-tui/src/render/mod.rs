//! Main render/view function (View in TEA pattern)


use nird_app::view::{select_view, ViewPanel};
use nird_app::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{styles, Palette};

/// Render the complete UI (View function in TEA)
///
/// The frame is fully determined by `state`. The only thing written back is
/// the overlay's measured content size, which bounds its scroll offset.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let session = &state.session;
    let palette = Palette::for_theme(session.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(palette, session.theme()),
        areas.header,
    );

    let body_block = styles::glass_block(palette, true);
    let body = body_block.inner(areas.body);
    frame.render_widget(body_block, areas.body);

    match select_view(session) {
        ViewPanel::Hero => frame.render_widget(widgets::HeroPanel::new(palette), body),
        ViewPanel::ProfilePicker => frame.render_widget(
            widgets::ProfilePicker::new(palette, state.profile_focus, session.selected_profile()),
            body,
        ),
        ViewPanel::Content => frame.render_widget(
            widgets::ContentPanel::new(palette, session.content_bundle()),
            body,
        ),
        ViewPanel::Resources => frame.render_widget(widgets::ResourcesPanel::new(palette), body),
        ViewPanel::Final => frame.render_widget(
            widgets::FinalPanel::new(palette, state.final_focus).notice(state.notice.as_deref()),
            body,
        ),
    }

    frame.render_widget(
        widgets::ProgressNav::new(palette, session.step())
            .key_hints(state.settings.ui.show_key_hints),
        areas.nav,
    );

    if session.overlay_visible() {
        frame.render_stateful_widget(
            widgets::ConceptOverlay::new(palette),
            area,
            &mut state.overlay_scroll,
        );
    }
}
