use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Access token; prompted for when omitted
    #[arg(short, long)]
    token: Option<String>,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let secret = Config::token_secret();
    match login_args.token {
        Some(token) => secret.store(token.trim())?,
        None => {
            secret.prompt()?;
        }
    }

    msg_success!(Message::LoggedIn);
    Ok(())
}
