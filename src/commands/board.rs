use crate::{
    libs::{
        config::Config,
        events::TaskEvents,
        messages::Message,
        sync::BoardSession,
        task::Status,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Only show tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<Status>,
}

pub async fn cmd(board_args: BoardArgs) -> Result<()> {
    let config = Config::read()?;
    let events = TaskEvents::new();
    let session = BoardSession::mount(super::reconciler(&config), &events, board_args.status.into()).await?;

    let board = session.board();
    if board.is_empty() {
        msg_info!(Message::TasksNotFound);
    } else {
        msg_print!(Message::BoardHeader, true);
        View::board(&board)?;
    }

    session.unmount();
    Ok(())
}
