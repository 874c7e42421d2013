//! Optimistic board updates with rollback.
//!
//! Every gesture on the board runs the same transaction:
//!
//! ```text
//! snapshot ──▶ apply locally ──▶ confirm remotely ──┬─▶ ok:  keep the local state
//!                                                   └─▶ err: restore snapshot + notice
//! ```
//!
//! The local change is visible as soon as it is applied; the remote call is
//! the only suspension point. The board lock is never held across it, so a
//! second gesture may start while the first is in flight. Overlapping
//! gestures are not serialised: a rollback restores the snapshot taken by
//! its own gesture, even if another gesture has committed since.
//!
//! A failed confirmation never propagates. It becomes a rollback plus a
//! [`Notice`] that expires on its own after [`NOTICE_TTL`].

use super::board::{Board, Location, Move};
use super::events::{TaskEvent, TaskEvents, TaskSubscription};
use super::messages::Message;
use super::task::{NewTask, Task, TaskFilter, TaskPatch};
use crate::api::{ApiError, TaskRemote};
use dialoguer::{theme::ColorfulTheme, Confirm};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// How long an error notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// End state of a drag gesture, as reported by the drag-and-drop layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    /// Id of the dragged task.
    pub draggable_id: String,
    pub source: Location,
    /// `None` when the card was dropped outside every column.
    pub destination: Option<Location>,
}

impl DragResult {
    pub fn new(draggable_id: &str, source: Location, destination: Option<Location>) -> Self {
        Self {
            draggable_id: draggable_id.to_string(),
            source,
            destination,
        }
    }
}

/// What a gesture ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dropped outside the board. Nothing happened.
    Cancelled,
    /// Dropped where it started. Nothing happened.
    Unchanged,
    /// The gesture referred to a card that is not where it claimed to be.
    Stale,
    /// The user answered "no" to the confirmation prompt.
    Declined,
    /// Reordered inside a column. Local only, nothing was sent.
    Reordered,
    /// The remote call succeeded and the optimistic state stands.
    Committed,
    /// The remote call failed and the snapshot was restored.
    RolledBack,
    /// The board was unmounted before the gesture resolved.
    Detached,
}

/// Blocking yes/no question asked before destructive actions.
pub trait Prompter {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Asks on the terminal. Any prompt error counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Answers "yes" without asking, for `--yes` style flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Transient error shown after a rollback.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: Message,
    raised_at: Instant,
}

#[derive(Debug, Default)]
struct BoardState {
    board: Board,
    notice: Option<Notice>,
    mounted: bool,
}

/// Shared handle over one mounted board.
///
/// Clones share the same board, so a clone can carry a gesture while the
/// owner renders.
pub struct Reconciler<R> {
    remote: Arc<R>,
    state: Arc<Mutex<BoardState>>,
    notice_ttl: Duration,
}

impl<R> Clone for Reconciler<R> {
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            state: Arc::clone(&self.state),
            notice_ttl: self.notice_ttl,
        }
    }
}

impl<R: TaskRemote> Reconciler<R> {
    /// A mounted, empty board backed by `remote`.
    pub fn new(remote: R) -> Self {
        Self {
            remote: Arc::new(remote),
            state: Arc::new(Mutex::new(BoardState {
                mounted: true,
                ..Default::default()
            })),
            notice_ttl: NOTICE_TTL,
        }
    }

    pub fn with_notice_ttl(mut self, notice_ttl: Duration) -> Self {
        self.notice_ttl = notice_ttl;
        self
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        self.state.lock().board.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.lock().mounted
    }

    /// Replaces the whole board, e.g. after a fetch. Ignored once unmounted.
    pub fn replace(&self, board: Board) -> bool {
        let mut state = self.state.lock();
        if !state.mounted {
            return false;
        }
        state.board = board;
        true
    }

    /// The current error notice, if it has not expired yet.
    pub fn notice(&self) -> Option<Message> {
        let mut state = self.state.lock();
        match &state.notice {
            Some(notice) if notice.raised_at.elapsed() < self.notice_ttl => Some(notice.message.clone()),
            Some(_) => {
                state.notice = None;
                None
            }
            None => None,
        }
    }

    /// Drops the board and refuses every later update.
    fn detach(&self) {
        let mut state = self.state.lock();
        state.mounted = false;
        state.board = Board::default();
        state.notice = None;
    }

    /// Applies a finished drag.
    ///
    /// A reorder inside a column only changes the local board. A move to
    /// another column also sends one status update and rolls back if it fails.
    pub async fn on_drag_end(&self, drag: DragResult) -> Outcome {
        let Some(destination) = drag.destination else {
            return Outcome::Cancelled;
        };
        let mv = Move::new(drag.source, destination);
        if mv.is_noop() {
            return Outcome::Unchanged;
        }

        let snapshot = {
            let mut state = self.state.lock();
            if !state.mounted {
                return Outcome::Detached;
            }
            let in_place = state.board.task_at(mv.source).is_some_and(|task| task.id == drag.draggable_id);
            if !in_place {
                tracing::debug!(task_id = %drag.draggable_id, source = ?mv.source, "drag source is stale, ignoring");
                return Outcome::Stale;
            }
            let snapshot = state.board.clone();
            match snapshot.apply_move(&mv) {
                Ok(next) => state.board = next,
                Err(e) => {
                    tracing::debug!(task_id = %drag.draggable_id, error = %e, "drag could not be applied");
                    return Outcome::Stale;
                }
            }
            snapshot
        };

        if mv.is_reorder() {
            tracing::debug!(task_id = %drag.draggable_id, column = %destination.column, "reordered locally");
            return Outcome::Reordered;
        }

        tracing::debug!(
            task_id = %drag.draggable_id,
            from = %mv.source.column,
            to = %destination.column,
            "moved optimistically, confirming"
        );
        match self.remote.update(&drag.draggable_id, &TaskPatch::status(destination.column)).await {
            Ok(_) => self.commit(),
            Err(e) => {
                tracing::warn!(task_id = %drag.draggable_id, error = %e, "status update failed, rolling back");
                self.rollback(snapshot, Message::TaskMoveFailed)
            }
        }
    }

    /// Deletes a task after the user confirms.
    ///
    /// The card disappears at once; if the server refuses, it comes back at
    /// its original position.
    pub async fn delete<P: Prompter + ?Sized>(&self, id: &str, prompter: &P) -> Outcome {
        let title = {
            let state = self.state.lock();
            if !state.mounted {
                return Outcome::Detached;
            }
            match state.board.locate(id).and_then(|location| state.board.task_at(location)) {
                Some(task) => task.title.clone(),
                None => return Outcome::Stale,
            }
        };

        if !prompter.confirm(&Message::ConfirmDeleteTask(title).to_string()) {
            return Outcome::Declined;
        }

        let snapshot = {
            let mut state = self.state.lock();
            if !state.mounted {
                return Outcome::Detached;
            }
            // The board may have been refreshed while the prompt was open.
            let Some(location) = state.board.locate(id) else {
                return Outcome::Stale;
            };
            let snapshot = state.board.clone();
            match snapshot.remove(location) {
                Ok((next, _)) => state.board = next,
                Err(_) => return Outcome::Stale,
            }
            snapshot
        };

        match self.remote.delete(id).await {
            Ok(_) => self.commit(),
            Err(e) => {
                tracing::warn!(task_id = %id, error = %e, "delete failed, rolling back");
                self.rollback(snapshot, Message::TaskDeleteFailed)
            }
        }
    }

    fn commit(&self) -> Outcome {
        if self.is_mounted() {
            Outcome::Committed
        } else {
            Outcome::Detached
        }
    }

    fn rollback(&self, snapshot: Board, message: Message) -> Outcome {
        let mut state = self.state.lock();
        if !state.mounted {
            return Outcome::Detached;
        }
        state.board = snapshot;
        state.notice = Some(Notice {
            message,
            raised_at: Instant::now(),
        });
        Outcome::RolledBack
    }
}

/// A board component for as long as it is mounted.
///
/// Mounting subscribes to task events and fetches; the board is rebuilt on
/// filter changes and whenever another component reports a change.
/// Unmounting drops the subscription and detaches the reconciler, so
/// gestures still in flight resolve as [`Outcome::Detached`].
pub struct BoardSession<R> {
    reconciler: Reconciler<R>,
    filter: TaskFilter,
    subscription: TaskSubscription,
}

impl<R: TaskRemote> BoardSession<R> {
    pub async fn mount(reconciler: Reconciler<R>, events: &TaskEvents, filter: TaskFilter) -> Result<Self, ApiError> {
        let session = Self {
            reconciler,
            filter,
            subscription: events.subscribe(),
        };
        session.refresh().await?;
        Ok(session)
    }

    pub fn reconciler(&self) -> &Reconciler<R> {
        &self.reconciler
    }

    pub fn board(&self) -> Board {
        self.reconciler.board()
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Rebuilds the board from a fresh fetch.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let tasks = self.reconciler.remote().list(self.filter).await?;
        self.reconciler.replace(Board::partition(tasks));
        Ok(())
    }

    pub async fn set_filter(&mut self, filter: TaskFilter) -> Result<(), ApiError> {
        self.filter = filter;
        self.refresh().await
    }

    /// Refreshes if any change event arrived since the last call.
    pub async fn sync(&mut self) -> Result<bool, ApiError> {
        if !self.subscription.drain() {
            return Ok(false);
        }
        self.refresh().await?;
        Ok(true)
    }

    /// Waits for the next change event and refreshes. Returns `false` when
    /// the event bus is gone.
    pub async fn wait_for_change(&mut self) -> Result<bool, ApiError> {
        if self.subscription.next().await.is_none() {
            return Ok(false);
        }
        self.subscription.drain();
        self.refresh().await?;
        Ok(true)
    }

    pub fn unmount(self) {
        self.reconciler.detach();
    }
}

/// Validates and creates a task, then tells mounted boards to refresh.
pub async fn create_task<R: TaskRemote>(remote: &R, events: &TaskEvents, draft: NewTask) -> Result<Task, ApiError> {
    let draft = draft.validate()?;
    let task = remote.create(&draft).await?;
    tracing::debug!(task_id = %task.id, "task created");
    events.publish(TaskEvent::Created { id: task.id.clone() });
    Ok(task)
}

/// Validates and applies an edit made outside the board, then tells mounted
/// boards to refresh.
pub async fn update_task<R: TaskRemote>(remote: &R, events: &TaskEvents, id: &str, patch: TaskPatch) -> Result<Task, ApiError> {
    let patch = patch.validate()?;
    let task = remote.update(id, &patch).await?;
    events.publish(TaskEvent::Changed);
    Ok(task)
}
