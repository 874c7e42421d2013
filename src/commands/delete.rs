use crate::{
    libs::{
        config::Config,
        events::TaskEvents,
        messages::Message,
        sync::{AssumeYes, BoardSession, Outcome, Prompter, TerminalPrompter},
        task::TaskFilter,
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let events = TaskEvents::new();
    let session = BoardSession::mount(super::reconciler(&config), &events, TaskFilter::All).await?;

    let prompter: &dyn Prompter = if delete_args.yes { &AssumeYes } else { &TerminalPrompter };
    let reconciler = session.reconciler().clone();
    let outcome = reconciler.delete(&delete_args.id, prompter).await;

    match outcome {
        Outcome::Committed => msg_success!(Message::TaskDeleted(delete_args.id)),
        Outcome::Declined => msg_info!(Message::TaskDeleteCancelled),
        Outcome::Stale => msg_error!(Message::TaskNotFoundWithId(delete_args.id)),
        Outcome::RolledBack => msg_error!(reconciler.notice().unwrap_or(Message::TaskDeleteFailed)),
        Outcome::Detached => msg_warning!(Message::BoardDetached),
        Outcome::Cancelled | Outcome::Unchanged | Outcome::Reordered => {}
    }

    session.unmount();
    Ok(())
}
