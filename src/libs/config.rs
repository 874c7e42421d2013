//! Configuration for the command-line client.
//!
//! Settings come from three places, highest priority first:
//!
//! 1. environment variables (a `.env` file is loaded at startup):
//!    `TASKBOARD_API_URL`, `TASKBOARD_ACCESS_TOKEN`
//! 2. `config.json` in the platform data directory
//! 3. built-in defaults
//!
//! The access token is never written to `config.json`; `login` stores it
//! encrypted next to it (see [`Secret`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("API: {}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::secret::Secret;
use crate::api::ApiConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const TOKEN_FILE_NAME: &str = ".access_token";
pub const ENV_API_URL: &str = "TASKBOARD_API_URL";
pub const ENV_ACCESS_TOKEN: &str = "TASKBOARD_ACCESS_TOKEN";

/// A section offered by the `init` wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Board behaviour.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Seconds an error notice stays visible after a rollback.
    pub notice_ttl: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { notice_ttl: 3 }
    }
}

impl BoardConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "board".to_string(),
            name: "Board".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleBoard);
        Ok(Self {
            notice_ttl: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNoticeTtl.to_string())
                .default(config.notice_ttl)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardConfig>,
}

impl Config {
    /// Loads `config.json`, or the defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ApiConfig::module(), BoardConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                "board" => config.board = Some(BoardConfig::init(&config.board)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn api_url(&self) -> String {
        env::var(ENV_API_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.api.clone().unwrap_or_default().api_url)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.board.clone().unwrap_or_default().notice_ttl)
    }

    /// Where the access token is stored.
    pub fn token_secret() -> Secret {
        Secret::new(TOKEN_FILE_NAME, &Message::PromptAccessToken.to_string())
    }

    /// The bearer token: environment first, then the stored one.
    pub fn access_token(&self) -> Option<String> {
        env::var(ENV_ACCESS_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| Self::token_secret().read())
    }
}
