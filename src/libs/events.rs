//! Change notifications between components.
//!
//! A mounted board holds a [`TaskSubscription`] for as long as it is mounted.
//! Any component that changes the task set outside the board (the create
//! form, for instance) publishes on the shared [`TaskEvents`] bus and every
//! live board refreshes. Dropping the subscription unsubscribes.

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Buffered events per subscriber before older ones are discarded.
const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// A task was created somewhere other than the board.
    Created { id: String },
    /// The task set changed in a way the board cannot apply locally.
    Changed,
}

#[derive(Debug, Clone)]
pub struct TaskEvents {
    sender: broadcast::Sender<TaskEvent>,
}

impl Default for TaskEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> TaskSubscription {
        TaskSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Sends `event` to every live subscription and returns how many got it.
    pub fn publish(&self, event: TaskEvent) -> usize {
        tracing::debug!(?event, subscribers = self.sender.receiver_count(), "publishing task event");
        // No subscribers is not an error: nothing is mounted to refresh.
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[derive(Debug)]
pub struct TaskSubscription {
    receiver: broadcast::Receiver<TaskEvent>,
}

impl TaskSubscription {
    /// Consumes everything already queued. Returns `true` if anything was.
    ///
    /// A lagged receiver counts as "something changed": events were lost and a
    /// refresh is the only safe answer.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.receiver.try_recv() {
                Ok(_) | Err(TryRecvError::Lagged(_)) => changed = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return changed,
            }
        }
    }

    /// Waits for the next event. `None` once every publisher is gone.
    pub async fn next(&mut self) -> Option<TaskEvent> {
        match self.receiver.recv().await {
            Ok(event) => Some(event),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "task subscription lagged");
                Some(TaskEvent::Changed)
            }
            Err(RecvError::Closed) => None,
        }
    }
}
