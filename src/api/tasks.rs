//! HTTP client for the `/tasks` endpoints.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::api::{TaskRemote, TasksApi};
//! use taskboard::libs::task::{Status, TaskFilter};
//!
//! # async fn run() -> Result<(), taskboard::api::ApiError> {
//! let api = TasksApi::new("http://localhost:5000/api", Some("token".to_string()));
//! let pending = api.list(TaskFilter::ByStatus(Status::Pending)).await?;
//! # Ok(())
//! # }
//! ```

use super::{ApiError, TaskRemote};
use crate::libs::http::Http;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch};
use serde::Deserialize;

const TASKS_URL: &str = "tasks";

#[derive(Debug, Deserialize)]
struct TaskListResponse {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    task: Task,
}

#[derive(Debug, Clone)]
pub struct TasksApi {
    http: Http,
}

impl TasksApi {
    pub fn new(api_url: &str, token: Option<String>) -> Self {
        Self {
            http: Http::new(api_url, token),
        }
    }

    fn task_url(id: &str) -> String {
        format!("{}/{}", TASKS_URL, id)
    }
}

impl TaskRemote for TasksApi {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, ApiError> {
        let response: TaskListResponse = match filter.status() {
            Some(status) => self.http.get(TASKS_URL, &[("status", status.as_str())]).await?,
            None => self.http.get(TASKS_URL, &[]).await?,
        };
        tracing::debug!(count = response.tasks.len(), ?filter, "fetched tasks");
        Ok(response.tasks)
    }

    async fn create(&self, draft: &NewTask) -> Result<Task, ApiError> {
        let response: TaskResponse = self.http.post(TASKS_URL, draft).await?;
        Ok(response.task)
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let response: TaskResponse = self.http.put(&Self::task_url(id), patch).await?;
        Ok(response.task)
    }

    async fn delete(&self, id: &str) -> Result<Task, ApiError> {
        let response: TaskResponse = self.http.delete(&Self::task_url(id)).await?;
        Ok(response.task)
    }
}
