//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` entry point. Commands talk to the task API through the shared
//! helpers below, which resolve the API URL and access token from
//! [`Config`].

pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod mv;
pub mod profile;

use crate::{
    api::{TasksApi, UserApi},
    libs::{config::Config, messages::Message, sync::Reconciler},
    msg_error_anyhow,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Store the API access token")]
    Login(login::LoginArgs),
    #[command(about = "Remove the stored access token")]
    Logout,
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Show the task board")]
    Board(board::BoardArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(name = "move", about = "Move a task to another column or position", arg_required_else_help = true)]
    Move(mv::MoveArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Manage your user profile")]
    Profile(profile::ProfileArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::List(args) => list::cmd(args).await,
            Commands::Board(args) => board::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Move(args) => mv::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Profile(args) => profile::cmd(args).await,
        }
    }
}

/// Task client for the configured API, authenticated if a token is known.
pub(crate) fn tasks_api(config: &Config) -> TasksApi {
    TasksApi::new(&config.api_url(), config.access_token())
}

/// A fresh board reconciler over the configured API.
pub(crate) fn reconciler(config: &Config) -> Reconciler<TasksApi> {
    Reconciler::new(tasks_api(config)).with_notice_ttl(config.notice_ttl())
}

/// Profile calls always need a token.
pub(crate) fn user_api(config: &Config) -> Result<UserApi> {
    let token = config.access_token().ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))?;
    Ok(UserApi::new(&config.api_url(), Some(token)))
}
