use crate::{
    api::user::ProfileUpdate,
    libs::{config::Config, messages::Message},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Update email or display name
    Update {
        #[arg(short, long)]
        email: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete your account
    Delete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: ProfileArgs) -> Result<()> {
    match args.command {
        ProfileCommand::Update { email, name } => handle_update(email, name).await,
        ProfileCommand::Delete { yes } => handle_delete(yes).await,
    }
}

async fn handle_update(email: Option<String>, name: Option<String>) -> Result<()> {
    let config = Config::read()?;
    let update = ProfileUpdate {
        email,
        full_name: name,
        metadata: None,
    };

    let profile = super::user_api(&config)?.update_profile(update).await?;

    let who = profile
        .full_name()
        .map(str::to_string)
        .or_else(|| profile.email.clone())
        .unwrap_or(profile.id);
    msg_success!(Message::ProfileUpdated(who));
    Ok(())
}

async fn handle_delete(yes: bool) -> Result<()> {
    let config = Config::read()?;
    let api = super::user_api(&config)?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteProfile.to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::ProfileDeleteCancelled);
        return Ok(());
    }

    if !api.delete_profile().await? {
        msg_warning!(Message::ProfileDeleteNotConfirmed);
        return Ok(());
    }

    Config::token_secret().delete()?;
    msg_success!(Message::ProfileDeleted);
    Ok(())
}
