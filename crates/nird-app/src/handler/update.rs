//! Main update function - handles state transitions (TEA pattern)

use nird_core::content::CREATE_ACCOUNT_NOTICE;
use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState, FinalAction};

use super::{keys::handle_key, navigation, profile, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::QuitWhenIdle => {
            if state.session.pending_advance().is_some() {
                debug!("Quit deferred until pending transition fires");
                state.quit_when_idle = true;
            } else {
                state.phase = AppPhase::Quitting;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Advance => navigation::handle_advance(state),
        Message::Retreat => navigation::handle_retreat(state),
        Message::JumpTo(index) => navigation::handle_jump_to(state, index),
        Message::Restart => navigation::handle_jump_to(state, 0),
        Message::DeferredAdvance { ticket } => navigation::handle_deferred_advance(state, ticket),

        // ─────────────────────────────────────────────────────────
        // Profile
        // ─────────────────────────────────────────────────────────
        Message::FocusNextProfile => {
            state.focus_next_profile();
            UpdateResult::none()
        }
        Message::FocusPreviousProfile => {
            state.focus_previous_profile();
            UpdateResult::none()
        }
        Message::SelectProfile(p) => profile::handle_select_profile(state, p),
        Message::SelectFocusedProfile => {
            UpdateResult::message(Message::SelectProfile(state.focused_profile()))
        }

        // ─────────────────────────────────────────────────────────
        // Theme / Overlay
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let theme = state.session.toggle_theme();
            info!("Theme switched to {}", theme);
            UpdateResult::none()
        }

        Message::SetOverlay(visible) => {
            if visible != state.session.overlay_visible() {
                state.overlay_scroll.scroll_to_top();
            }
            state.session.set_overlay(visible);
            UpdateResult::none()
        }

        Message::OverlayScrollUp => {
            state.overlay_scroll.scroll_up(1);
            UpdateResult::none()
        }
        Message::OverlayScrollDown => {
            state.overlay_scroll.scroll_down(1);
            UpdateResult::none()
        }
        Message::OverlayPageUp => {
            state.overlay_scroll.page_up();
            UpdateResult::none()
        }
        Message::OverlayPageDown => {
            state.overlay_scroll.page_down();
            UpdateResult::none()
        }
        Message::OverlayScrollToTop => {
            state.overlay_scroll.scroll_to_top();
            UpdateResult::none()
        }
        Message::OverlayScrollToBottom => {
            state.overlay_scroll.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Final step
        // ─────────────────────────────────────────────────────────
        Message::ToggleFinalFocus => {
            state.final_focus = state.final_focus.toggled();
            UpdateResult::none()
        }

        Message::ActivateFinalAction => match state.final_focus {
            FinalAction::CreateAccount => UpdateResult::message(Message::CreateAccount),
            FinalAction::Restart => UpdateResult::message(Message::Restart),
        },

        Message::CreateAccount => {
            info!("Account creation requested (not available)");
            state.notice = Some(CREATE_ACCOUNT_NOTICE.to_string());
            UpdateResult::none()
        }
    }
}
