//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per panel and for the overlay
//! - `navigation`: Step navigation handlers
//! - `profile`: Profile focus and selection handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod profile;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use crate::state::TransitionTicket;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send `Message::DeferredAdvance { ticket }` back after `delay`.
    ///
    /// Scheduling a new ticket supersedes any transition still waiting.
    ScheduleAdvance {
        ticket: TransitionTicket,
        delay: Duration,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
