//! Headless mode - line commands in, NDJSON events out
//!
//! Drives the same `Engine` as the TUI without a terminal, for scripting and
//! end-to-end checks.
//!
//! # Event Format
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```json
//! {"event":"started","version":"0.1.0","timestamp":1704700001000}
//! {"event":"state","step":1,"label":"Profil","panel":"profile_picker","theme":"dark","profile":null,"overlay":false,"pending_advance":false,"bundle":"Deviens un acteur du numérique responsable","timestamp":1704700001500}
//! {"event":"error","message":"Invalid command: unknown command: fly","fatal":false,"timestamp":1704700002000}
//! ```

pub mod runner;

pub use runner::{parse_command, run_headless};

use chrono::Utc;
use nird_app::view::select_view;
use nird_app::AppState;
use nird_core::{Profile, ThemeMode};
use serde::Serialize;
use std::io::Write;

/// Full view of the session at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub step: usize,
    pub label: &'static str,
    pub panel: &'static str,
    pub theme: ThemeMode,
    pub profile: Option<Profile>,
    pub overlay: bool,
    pub pending_advance: bool,
    pub bundle: &'static str,
    pub timestamp: i64,
}

impl StateSnapshot {
    pub fn capture(state: &AppState) -> Self {
        let session = &state.session;
        Self {
            step: session.step_index(),
            label: session.step().label(),
            panel: select_view(session).name(),
            theme: session.theme(),
            profile: session.selected_profile(),
            overlay: session.overlay_visible(),
            pending_advance: session.pending_advance().is_some(),
            bundle: session.content_bundle().title,
            timestamp: now(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    Started { version: &'static str, timestamp: i64 },

    /// Emitted at start and after every processed message
    State(StateSnapshot),

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Stopped { step: usize, timestamp: i64 },
}

impl HeadlessEvent {
    pub fn started() -> Self {
        Self::Started {
            version: env!("CARGO_PKG_VERSION"),
            timestamp: now(),
        }
    }

    pub fn state(state: &AppState) -> Self {
        Self::State(StateSnapshot::capture(state))
    }

    pub fn error(err: &nird_core::Error) -> Self {
        Self::Error {
            message: err.to_string(),
            fatal: err.is_fatal(),
            timestamp: now(),
        }
    }

    pub fn stopped(state: &AppState) -> Self {
        Self::Stopped {
            step: state.session.step_index(),
            timestamp: now(),
        }
    }

    /// Serialize as one NDJSON line into `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> nird_core::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }
}

/// Current timestamp in milliseconds
fn now() -> i64 {
    Utc::now().timestamp_millis()
}
