//! `move`: drag a card from the command line.
//!
//! The task is looked up on a freshly fetched board and the move runs
//! through the same optimistic path as a drag on the board, so a refused
//! status change is reported and nothing is left half-applied.

use crate::{
    libs::{
        board::Location,
        config::Config,
        events::TaskEvents,
        messages::Message,
        sync::{BoardSession, DragResult, Outcome},
        task::{Status, TaskFilter},
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
    /// Target column
    #[arg(required = true, value_enum)]
    status: Status,
    /// Zero-based position in the target column; defaults to the bottom
    #[arg(short, long)]
    position: Option<usize>,
}

pub async fn cmd(move_args: MoveArgs) -> Result<()> {
    let config = Config::read()?;
    let events = TaskEvents::new();
    let session = BoardSession::mount(super::reconciler(&config), &events, TaskFilter::All).await?;
    let board = session.board();

    let Some(source) = board.locate(&move_args.id) else {
        msg_error!(Message::TaskNotFoundWithId(move_args.id));
        session.unmount();
        return Ok(());
    };
    let title = board.task_at(source).map(|task| task.title.clone()).unwrap_or_default();

    let bottom = board.column(move_args.status).len();
    let bottom = if source.column == move_args.status { bottom.saturating_sub(1) } else { bottom };
    let destination = Location::new(move_args.status, move_args.position.unwrap_or(bottom));

    let reconciler = session.reconciler().clone();
    let outcome = reconciler
        .on_drag_end(DragResult::new(&move_args.id, source, Some(destination)))
        .await;

    match outcome {
        Outcome::Committed => msg_success!(Message::TaskMoved(title, move_args.status.title().to_string())),
        Outcome::Reordered => msg_info!(Message::TaskReordered(move_args.status.title().to_string())),
        Outcome::Unchanged | Outcome::Cancelled => msg_info!(Message::TaskAlreadyInPlace),
        Outcome::Stale | Outcome::Declined => msg_warning!(Message::TaskChangedElsewhere),
        Outcome::RolledBack => msg_error!(reconciler.notice().unwrap_or(Message::TaskMoveFailed)),
        Outcome::Detached => msg_warning!(Message::BoardDetached),
    }

    session.unmount();
    Ok(())
}
