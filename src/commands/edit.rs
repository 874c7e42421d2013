use crate::{
    libs::{
        config::Config,
        events::TaskEvents,
        messages::Message,
        sync::update_task,
        task::{parse_due_date, Status, TaskPatch},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
    #[arg(short, long)]
    title: Option<String>,
    /// New description; an empty value clears it
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long, value_enum)]
    status: Option<Status>,
    /// New due date: YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

pub async fn cmd(edit_args: EditArgs) -> Result<()> {
    let config = Config::read()?;

    let due_date = match (edit_args.due.as_deref(), edit_args.clear_due) {
        (Some(due), _) => Some(Some(parse_due_date(due)?)),
        (None, true) => Some(None),
        (None, false) => None,
    };
    let patch = TaskPatch {
        title: edit_args.title,
        description: edit_args.description.map(Some),
        status: edit_args.status,
        due_date,
    };

    let task = update_task(&super::tasks_api(&config), &TaskEvents::new(), &edit_args.id, patch).await?;

    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}
