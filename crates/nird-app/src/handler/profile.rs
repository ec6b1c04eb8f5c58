//! Profile selection handlers

use nird_core::Profile;
use tracing::info;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Record the profile now and ask the event loop for the deferred advance
pub fn handle_select_profile(state: &mut AppState, profile: Profile) -> UpdateResult {
    let ticket = state.session.select_profile(profile);
    state.profile_focus = profile.position();
    let delay = state.selection_delay();
    info!(
        "Profile selected: {} (advance in {}ms, ticket {})",
        profile,
        delay.as_millis(),
        ticket.id()
    );
    UpdateResult::action(UpdateAction::ScheduleAdvance { ticket, delay })
}
