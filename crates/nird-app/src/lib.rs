//! nird-app - Application state and orchestration for the NIRD onboarding wizard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the navigation state controller, the pure view selector, key handling, and the
//! Engine that owns state and the deferred transitions scheduled from it. It has no
//! terminal dependency so the TUI and the headless runner share it unchanged.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, FinalAction, OverlayScroll, SessionState, TransitionTicket};
pub use view::ViewPanel;
