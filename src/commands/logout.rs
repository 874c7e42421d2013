use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    if Config::token_secret().delete()? {
        msg_success!(Message::LoggedOut);
    } else {
        msg_info!(Message::NotLoggedIn);
    }
    Ok(())
}
