//! Engine: the single owner of application state
//!
//! Both the TUI runner and the headless runner hold an `Engine` and feed it
//! messages. The engine runs the TEA update loop, dispatches the resulting
//! actions, and owns the deferred-transition tasks so that shutting it down
//! also cancels them.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::actions::{handle_action, PendingTransitions};
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Capacity of the engine's message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Owns `AppState`, the message channel and the pending transitions
pub struct Engine {
    /// Application state (Model)
    pub state: AppState,

    /// Receiver for messages produced outside the update loop
    /// (signal handler, deferred transitions, headless stdin)
    pub msg_rx: mpsc::Receiver<Message>,

    msg_tx: mpsc::Sender<Message>,
    pending: PendingTransitions,
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state: AppState::with_settings(settings),
            msg_rx,
            msg_tx,
            pending: PendingTransitions::new(),
        }
    }

    /// Sender for producers outside the engine
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Process a message through the TEA update function, following up on
    /// any chained messages and dispatching actions
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                handle_action(action, self.msg_tx.clone(), &mut self.pending);
            }

            msg = result.message;
        }
    }

    /// Drain and process every message already queued on the channel
    pub fn drain_pending_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Tear down: cancel scheduled transitions so none can fire afterwards
    pub fn shutdown(&mut self) {
        self.pending.cancel_all();
        if let Some(ticket) = self.state.session.cancel_pending() {
            debug!("Dropped pending transition ticket {}", ticket.id());
        }
        info!(
            "Engine shut down at step {} ({})",
            self.state.session.step_index(),
            self.state.session.step()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nird_core::{Profile, Step};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_profile_selection_advances_after_delay() {
        let mut engine = Engine::new(Settings::default());
        engine.process_message(Message::Advance);
        engine.process_message(Message::SelectProfile(Profile::Teacher));
        assert_eq!(engine.state.session.step(), Step::Profile);

        let msg = engine.msg_rx.recv().await.unwrap();
        engine.process_message(msg);
        assert_eq!(engine.state.session.step(), Step::Content);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_respected() {
        let mut engine = Engine::new(Settings::default());
        engine.process_message(Message::SelectProfile(Profile::Student));

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(engine.msg_rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(engine.msg_rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_transition() {
        let mut engine = Engine::new(Settings::default());
        engine.process_message(Message::Advance);
        engine.process_message(Message::SelectProfile(Profile::School));
        engine.shutdown();

        let res = tokio::time::timeout(Duration::from_secs(1), engine.msg_rx.recv()).await;
        assert!(res.is_err(), "no message should arrive after shutdown");
        assert_eq!(engine.state.session.step(), Step::Profile);
        assert_eq!(engine.state.session.pending_advance(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselection_advances_once() {
        let mut engine = Engine::new(Settings::default());
        engine.process_message(Message::Advance);
        engine.process_message(Message::SelectProfile(Profile::Student));
        engine.process_message(Message::SelectProfile(Profile::School));

        let msg = engine.msg_rx.recv().await.unwrap();
        engine.process_message(msg);
        assert_eq!(engine.state.session.step(), Step::Content);

        let res = tokio::time::timeout(Duration::from_secs(1), engine.msg_rx.recv()).await;
        assert!(res.is_err());
        assert_eq!(engine.state.session.step(), Step::Content);
    }

    #[tokio::test]
    async fn test_drain_processes_external_messages() {
        let mut engine = Engine::new(Settings::default());
        let tx = engine.msg_sender();
        tx.send(Message::ToggleTheme).await.unwrap();
        tx.send(Message::Quit).await.unwrap();

        engine.drain_pending_messages();
        assert!(!engine.state.session.is_dark());
        assert!(engine.should_quit());
    }
}
