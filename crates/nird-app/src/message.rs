//! Message types for the application (TEA pattern)

use nird_core::Profile;

use crate::input_key::InputKey;
use crate::state::TransitionTicket;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Quit as soon as no deferred transition is pending (headless stdin EOF)
    QuitWhenIdle,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move to the next step (clamped)
    Advance,
    /// Move to the previous step (clamped)
    Retreat,
    /// Jump to a step by index (out-of-range clamps to the last step)
    JumpTo(usize),
    /// Restart the journey from the first step, keeping profile and theme
    Restart,

    // ─────────────────────────────────────────────────────────
    // Profile Messages
    // ─────────────────────────────────────────────────────────
    /// Move profile focus down/right
    FocusNextProfile,
    /// Move profile focus up/left
    FocusPreviousProfile,
    /// Select a profile and schedule the deferred advance
    SelectProfile(Profile),
    /// Select whichever profile card has focus
    SelectFocusedProfile,
    /// The selection delay elapsed for `ticket`
    DeferredAdvance { ticket: TransitionTicket },

    // ─────────────────────────────────────────────────────────
    // Theme / Overlay Messages
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    /// Show or hide the concept overlay
    SetOverlay(bool),
    OverlayScrollUp,
    OverlayScrollDown,
    OverlayPageUp,
    OverlayPageDown,
    OverlayScrollToTop,
    OverlayScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Final Step Messages
    // ─────────────────────────────────────────────────────────
    /// Switch focus between the final step's two actions
    ToggleFinalFocus,
    /// Activate the focused final action
    ActivateFinalAction,
    /// Account creation placeholder
    CreateAccount,
}
