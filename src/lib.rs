//! # Taskboard - a Kanban client for a task API
//!
//! Lists, creates, edits and deletes tasks on a remote task service and
//! shows them as a three-column board (Pending, In Progress, Completed).
//!
//! ## Features
//!
//! - **Board**: tasks partitioned by status, moved between columns with
//!   optimistic updates that roll back when the server refuses them
//! - **Task Management**: create, edit and delete with client-side validation
//! - **Profile**: update or delete the signed-in user's profile
//! - **Secure Storage**: the access token is kept encrypted on disk
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
