use crate::{
    libs::{
        config::Config,
        events::TaskEvents,
        messages::Message,
        sync::create_task,
        task::{parse_due_date, NewTask, Status},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    #[arg(short, long)]
    description: Option<String>,
    /// Initial column
    #[arg(short, long, value_enum, default_value_t = Status::Pending)]
    status: Status,
    /// Due date: YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339
    #[arg(long)]
    due: Option<String>,
}

pub async fn cmd(add_args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let draft = NewTask {
        title: add_args.title,
        description: add_args.description,
        status: add_args.status,
        due_date: add_args.due.as_deref().map(parse_due_date).transpose()?,
    };

    let task = create_task(&super::tasks_api(&config), &TaskEvents::new(), draft).await?;

    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}
