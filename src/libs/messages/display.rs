//! Display implementation for application messages.
//!
//! All user-facing wording lives here, in one match, so a message reads the
//! same wherever it is shown: console output, tracing events or the error
//! notice on the board.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully", title),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskMoved(title, column) => format!("Task '{}' moved to {}", title, column),
            Message::TaskReordered(column) => format!("Task reordered within {}", column),
            Message::TaskAlreadyInPlace => "Task is already there, nothing to do.".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found on the board.", id),
            Message::TaskMoveFailed => "Failed to update task status. Please try again.".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task. Please try again.".to_string(),
            Message::TaskDeleteCancelled => "Deletion cancelled.".to_string(),
            Message::TaskChangedElsewhere => "The board changed before the action ran. Refresh and try again.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({}):", count),
            Message::BoardHeader => "Task Board".to_string(),
            Message::BoardDetached => "The board was closed before the action finished.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration and stored token removed".to_string(),
            Message::ConfigModuleApi => "Task API settings".to_string(),
            Message::ConfigModuleBoard => "Board settings".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::LoggedIn => "Access token saved.".to_string(),
            Message::LoggedOut => "Access token removed.".to_string(),
            Message::NotLoggedIn => "No access token stored.".to_string(),

            // === PROFILE MESSAGES ===
            Message::ProfileUpdated(who) => format!("Profile {} updated successfully", who),
            Message::ProfileDeleted => "User account deleted successfully".to_string(),
            Message::ProfileDeleteCancelled => "Account deletion cancelled.".to_string(),
            Message::ProfileDeleteNotConfirmed => "The server did not confirm the account deletion.".to_string(),
            Message::ConfirmDeleteProfile => "Delete your account and all of its tasks? This cannot be undone.".to_string(),

            // === PROMPTS ===
            Message::PromptApiUrl => "Enter the task API URL".to_string(),
            Message::PromptNoticeTtl => "Enter how long error notices stay visible (seconds)".to_string(),
            Message::PromptAccessToken => "Enter your access token".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
        };
        write!(f, "{}", text)
    }
}
