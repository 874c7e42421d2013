use crate::{
    api::TaskRemote,
    libs::{config::Config, messages::Message, task::Status, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<Status>,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = super::tasks_api(&config).list(list_args.status.into()).await?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks)?;
    Ok(())
}
