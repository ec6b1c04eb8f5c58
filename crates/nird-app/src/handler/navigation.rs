//! Step navigation handlers

use tracing::{debug, info};

use crate::state::{AppPhase, AppState, FinalAction, TransitionTicket};

use super::UpdateResult;

/// Handle advance message
pub fn handle_advance(state: &mut AppState) -> UpdateResult {
    if state.session.advance() {
        on_step_changed(state);
    }
    UpdateResult::none()
}

/// Handle retreat message
pub fn handle_retreat(state: &mut AppState) -> UpdateResult {
    if state.session.retreat() {
        on_step_changed(state);
    }
    UpdateResult::none()
}

/// Handle jump (and restart, which is a jump to the first step)
pub fn handle_jump_to(state: &mut AppState, index: usize) -> UpdateResult {
    let before = state.session.step();
    let after = state.session.jump_to(index);
    if index != after.index() {
        debug!("Jump index {} clamped to {}", index, after.index());
    }
    if before != after {
        on_step_changed(state);
    }
    UpdateResult::none()
}

/// Handle the delayed advance that follows a profile selection
pub fn handle_deferred_advance(state: &mut AppState, ticket: TransitionTicket) -> UpdateResult {
    let before = state.session.step();
    if state.session.apply_deferred_advance(ticket) && state.session.step() != before {
        on_step_changed(state);
    }

    if state.quit_when_idle && state.session.pending_advance().is_none() {
        state.phase = AppPhase::Quitting;
    }
    UpdateResult::none()
}

/// Reset per-panel UI bookkeeping after the step changed
fn on_step_changed(state: &mut AppState) {
    info!(
        "Step → {} ({})",
        state.session.step_index(),
        state.session.step()
    );
    state.notice = None;
    if let Some(profile) = state.session.selected_profile() {
        state.profile_focus = profile.position();
    }
    state.final_focus = FinalAction::default();
}
