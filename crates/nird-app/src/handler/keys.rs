//! Key event handlers for each panel and the concept overlay

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use crate::view::{select_view, ViewPanel};
use nird_core::Profile;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // The overlay is modal: nothing underneath reacts while it is open
    if state.session.overlay_visible() {
        return handle_key_overlay(key);
    }

    let panel_msg = match select_view(&state.session) {
        ViewPanel::Hero => handle_key_hero(key),
        ViewPanel::ProfilePicker => handle_key_profile(key),
        ViewPanel::Content | ViewPanel::Resources => handle_key_content(key),
        ViewPanel::Final => handle_key_final(key),
    };

    panel_msg.or_else(|| handle_key_global(key))
}

/// Keys available on every panel
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Progress navigation arrows
        InputKey::Right | InputKey::Char('l') => Some(Message::Advance),
        InputKey::Left | InputKey::Char('h') => Some(Message::Retreat),
        InputKey::Home => Some(Message::JumpTo(0)),
        InputKey::End => Some(Message::JumpTo(nird_core::STEP_COUNT - 1)),

        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('?' | 'i') => Some(Message::SetOverlay(true)),

        _ => None,
    }
}

/// Handle key events while the concept overlay is shown
fn handle_key_overlay(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('?' | 'i' | 'x') => {
            Some(Message::SetOverlay(false))
        }
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Scrolling (the copy outgrows short terminals)
        InputKey::Up | InputKey::Char('k') => Some(Message::OverlayScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::OverlayScrollDown),
        InputKey::PageUp => Some(Message::OverlayPageUp),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::OverlayPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::OverlayScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::OverlayScrollToBottom),

        _ => None,
    }
}

fn handle_key_hero(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Advance),
        InputKey::Char('c') => Some(Message::SetOverlay(true)),
        _ => None,
    }
}

fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SelectFocusedProfile),
        InputKey::Down | InputKey::Tab | InputKey::Char('j') => Some(Message::FocusNextProfile),
        InputKey::Up | InputKey::BackTab | InputKey::Char('k') => {
            Some(Message::FocusPreviousProfile)
        }
        InputKey::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            Some(Message::SelectProfile(Profile::ALL[index]))
        }
        _ => None,
    }
}

/// Content and resources both have a single "continue" call to action
fn handle_key_content(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Advance),
        _ => None,
    }
}

fn handle_key_final(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFinalAction),
        InputKey::Up | InputKey::Down | InputKey::Tab | InputKey::BackTab => {
            Some(Message::ToggleFinalFocus)
        }
        InputKey::Char('r') => Some(Message::Restart),
        _ => None,
    }
}
