//! View selector: pure mappings from state to what should be shown

use nird_core::content::{bundle_for, ContentBundle};
use nird_core::{Profile, Step, STEP_COUNT};

use crate::state::SessionState;

/// The five content panels of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPanel {
    Hero,
    ProfilePicker,
    Content,
    Resources,
    Final,
}

impl ViewPanel {
    /// Stable name used in headless snapshots
    pub fn name(self) -> &'static str {
        match self {
            ViewPanel::Hero => "hero",
            ViewPanel::ProfilePicker => "profile_picker",
            ViewPanel::Content => "content",
            ViewPanel::Resources => "resources",
            ViewPanel::Final => "final",
        }
    }
}

/// Panel bound to a step
pub fn panel_for_step(step: Step) -> ViewPanel {
    match step {
        Step::Hero => ViewPanel::Hero,
        Step::Profile => ViewPanel::ProfilePicker,
        Step::Content => ViewPanel::Content,
        Step::Resources => ViewPanel::Resources,
        Step::Final => ViewPanel::Final,
    }
}

/// Panel for the current session state
pub fn select_view(session: &SessionState) -> ViewPanel {
    panel_for_step(session.step())
}

/// Bundle for an optional profile; no selection means the student bundle
pub fn bundle_for_selection(profile: Option<Profile>) -> &'static ContentBundle {
    bundle_for(profile.unwrap_or(Profile::Student))
}

/// Bundle for a raw profile id; unrecognized ids mean the student bundle
pub fn bundle_for_id(id: &str) -> &'static ContentBundle {
    bundle_for_selection(Profile::from_id(id))
}

/// State of one progress dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMark {
    Completed,
    Active,
    Upcoming,
}

/// Progress dot for every step, relative to `current`
pub fn progress_marks(current: Step) -> [(Step, ProgressMark); STEP_COUNT] {
    Step::ALL.map(|step| {
        let mark = if step == current {
            ProgressMark::Active
        } else if step < current {
            ProgressMark::Completed
        } else {
            ProgressMark::Upcoming
        };
        (step, mark)
    })
}
