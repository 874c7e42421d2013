//! Clients for the task API.
//!
//! The board never talks HTTP directly. It depends on the [`TaskRemote`]
//! contract, which [`tasks::TasksApi`] implements over reqwest and tests
//! implement in memory.
//!
//! ## Endpoints
//!
//! | Method   | Path          | Body / query                                   | Success          |
//! |----------|---------------|------------------------------------------------|------------------|
//! | `GET`    | `/tasks`      | `?status=pending\|in-progress\|completed`      | `200 {tasks}`    |
//! | `POST`   | `/tasks`      | `{title, description?, status?, due_date?}`    | `201 {task}`     |
//! | `PUT`    | `/tasks/:id`  | partial `{title?, description?, status?, due_date?}` | `200 {task}` |
//! | `DELETE` | `/tasks/:id`  |                                                | `200 {task}`     |
//! | `PUT`    | `/user`       | `{email?, full_name?, metadata?}`              | `200 {user}`     |
//! | `DELETE` | `/user`       |                                                | `200 {deleted}`  |
//!
//! Every request carries the caller's bearer token. Scoping a caller to their
//! own rows is the server's job, not the client's.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task, TaskError, TaskFilter, TaskPatch};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod tasks;
pub mod user;

pub use tasks::TasksApi;
pub use user::UserApi;

/// Base URL used when neither the config file nor the environment set one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Failure of a call to the task API.
///
/// The board treats every variant the same way (roll back, show a notice);
/// the command-line front end prints them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Access token contains characters that cannot be sent in a header")]
    InvalidToken,
    #[error(transparent)]
    Invalid(#[from] TaskError),
    #[error(transparent)]
    InvalidProfile(#[from] user::ProfileError),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Error envelope returned by the API: `{error, message, details?}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

impl ApiError {
    /// Maps a non-success response to an error, reading the error envelope
    /// when the body has one.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let mut message = parsed
            .message
            .or(parsed.error)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
        if let Some(details) = parsed.details {
            message = format!("{} ({})", message, details);
        }

        match status {
            StatusCode::BAD_REQUEST => ApiError::Validation(message),
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Remote side of the board.
///
/// Implementations must scope every call to the authenticated caller.
#[allow(async_fn_in_trait)]
pub trait TaskRemote {
    /// Fetches the caller's tasks, newest first.
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, ApiError>;

    /// Creates a task and returns the stored record.
    async fn create(&self, draft: &NewTask) -> Result<Task, ApiError>;

    /// Applies a partial update and returns the stored record.
    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError>;

    /// Deletes a task and returns the deleted record.
    async fn delete(&self, id: &str) -> Result<Task, ApiError>;
}

/// Connection settings for the task API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to, e.g. `http://localhost:5000/api`.
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Task API".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
