//! Application state (Model in TEA pattern)
//!
//! [`SessionState`] is the navigation state controller: it owns the four
//! pieces of session state (theme, step, selected profile, overlay flag) and
//! is the only place they change. [`AppState`] wraps it with the UI-only
//! bookkeeping the terminal needs (focus cursors, notices, quit phase).

use std::time::Duration;

use nird_core::content::{bundle_for, ContentBundle};
use nird_core::{Profile, Step, ThemeMode};
use tracing::debug;

use crate::config::Settings;

/// Identifies one scheduled deferred advance.
///
/// Each profile selection issues a fresh ticket; only the most recent one is
/// honoured when its timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionTicket(u64);

impl TransitionTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Session-only wizard state and its mutators.
///
/// Every operation is total: navigation clamps at the bounds, and deferred
/// transitions with a stale ticket are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    theme: ThemeMode,
    step: Step,
    selected_profile: Option<Profile>,
    overlay_visible: bool,
    pending_advance: Option<TransitionTicket>,
    next_ticket: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Dark theme, first step, no profile, overlay hidden
    pub fn new() -> Self {
        Self::with_theme(ThemeMode::Dark)
    }

    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            step: Step::FIRST,
            selected_profile: None,
            overlay_visible: false,
            pending_advance: None,
            next_ticket: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn selected_profile(&self) -> Option<Profile> {
        self.selected_profile
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Ticket of the deferred advance waiting to fire, if any
    pub fn pending_advance(&self) -> Option<TransitionTicket> {
        self.pending_advance
    }

    /// Bundle for the selected profile, falling back to the student bundle
    pub fn content_bundle(&self) -> &'static ContentBundle {
        bundle_for(self.selected_profile.unwrap_or(Profile::Student))
    }

    // ─────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────

    /// Move one step forward. Returns `false` at the last step.
    pub fn advance(&mut self) -> bool {
        let next = self.step.next();
        let changed = next != self.step;
        self.step = next;
        changed
    }

    /// Move one step back. Returns `false` at the first step.
    pub fn retreat(&mut self) -> bool {
        let prev = self.step.prev();
        let changed = prev != self.step;
        self.step = prev;
        changed
    }

    /// Jump to `index`, clamping out-of-range values to the last step
    pub fn jump_to(&mut self, index: usize) -> Step {
        self.step = Step::from_index(index);
        self.step
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Record the profile and issue the ticket for its deferred advance.
    ///
    /// A previous pending ticket is superseded.
    pub fn select_profile(&mut self, profile: Profile) -> TransitionTicket {
        self.selected_profile = Some(profile);
        self.next_ticket += 1;
        let ticket = TransitionTicket(self.next_ticket);
        if let Some(old) = self.pending_advance.replace(ticket) {
            debug!("Ticket {} superseded by {}", old.id(), ticket.id());
        }
        ticket
    }

    pub fn set_overlay(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    /// Apply the deferred advance for `ticket` if it is still the pending one
    pub fn apply_deferred_advance(&mut self, ticket: TransitionTicket) -> bool {
        if self.pending_advance != Some(ticket) {
            debug!("Ignoring stale transition ticket {}", ticket.id());
            return false;
        }
        self.pending_advance = None;
        self.advance();
        true
    }

    /// Forget the pending deferred advance (teardown)
    pub fn cancel_pending(&mut self) -> Option<TransitionTicket> {
        self.pending_advance.take()
    }
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The two actions offered on the final step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalAction {
    #[default]
    CreateAccount,
    Restart,
}

impl FinalAction {
    pub fn toggled(self) -> FinalAction {
        match self {
            FinalAction::CreateAccount => FinalAction::Restart,
            FinalAction::Restart => FinalAction::CreateAccount,
        }
    }
}

/// Scroll position of the concept overlay
///
/// `total_lines` and `visible_lines` are measured when the overlay is drawn,
/// so the offset never runs past the last line of copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayScroll {
    /// First visible wrapped line
    pub offset: usize,
    /// Wrapped line count (set during render)
    pub total_lines: usize,
    /// Rows available for copy (set during render)
    pub visible_lines: usize,
}

impl OverlayScroll {
    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_lines.saturating_sub(1).max(1));
    }

    /// Copy hidden above the viewport
    pub fn has_more_above(&self) -> bool {
        self.offset > 0
    }

    /// Copy hidden below the viewport
    pub fn has_more_below(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Record the measured content size, pulling the offset back if the
    /// viewport grew
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    /// Navigation state controller
    pub session: SessionState,

    /// Current application phase
    pub phase: AppPhase,

    /// Loaded configuration
    pub settings: Settings,

    /// Focused card on the profile step (index into `Profile::ALL`)
    pub profile_focus: usize,

    /// Focused action on the final step
    pub final_focus: FinalAction,

    /// Transient one-line notice (cleared on navigation)
    pub notice: Option<String>,

    /// Quit once no deferred transition is pending
    pub quit_when_idle: bool,

    /// Concept overlay scroll position
    pub overlay_scroll: OverlayScroll,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            session: SessionState::with_theme(settings.ui.theme),
            phase: AppPhase::Running,
            settings,
            profile_focus: 0,
            final_focus: FinalAction::default(),
            notice: None,
            quit_when_idle: false,
            overlay_scroll: OverlayScroll::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Delay between a profile selection and its automatic advance
    pub fn selection_delay(&self) -> Duration {
        self.settings.behavior.selection_delay()
    }

    pub fn focused_profile(&self) -> Profile {
        Profile::ALL[self.profile_focus.min(Profile::ALL.len() - 1)]
    }

    pub fn focus_next_profile(&mut self) {
        self.profile_focus = (self.profile_focus + 1) % Profile::ALL.len();
    }

    pub fn focus_previous_profile(&mut self) {
        let len = Profile::ALL.len();
        self.profile_focus = (self.profile_focus + len - 1) % len;
    }
}
