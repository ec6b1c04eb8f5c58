//! Action handlers: UpdateAction dispatch and deferred-transition tasks

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::TransitionTicket;

/// Timer tasks for scheduled deferred advances.
///
/// At most one task is live: scheduling a new ticket aborts the previous
/// task. Dropping the set aborts whatever is still waiting.
#[derive(Debug, Default)]
pub struct PendingTransitions {
    current: Option<(TransitionTicket, JoinHandle<()>)>,
}

impl PendingTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task that sends `DeferredAdvance { ticket }` after `delay`
    pub fn schedule(
        &mut self,
        ticket: TransitionTicket,
        delay: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) {
        self.cancel_all();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if msg_tx
                .send(Message::DeferredAdvance { ticket })
                .await
                .is_err()
            {
                debug!(
                    "Transition ticket {} fired after the engine shut down",
                    ticket.id()
                );
            }
        });
        self.current = Some((ticket, handle));
    }

    /// Ticket of the live timer task, if any
    pub fn pending_ticket(&self) -> Option<TransitionTicket> {
        self.current
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(ticket, _)| *ticket)
    }

    /// Abort every waiting timer task
    pub fn cancel_all(&mut self) {
        if let Some((ticket, handle)) = self.current.take() {
            if !handle.is_finished() {
                debug!("Cancelling transition ticket {}", ticket.id());
            }
            handle.abort();
        }
    }
}

impl Drop for PendingTransitions {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Execute an action produced by `update()`
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    pending: &mut PendingTransitions,
) {
    match action {
        UpdateAction::ScheduleAdvance { ticket, delay } => {
            pending.schedule(ticket, delay, msg_tx);
        }
    }
}
