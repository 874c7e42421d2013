//! Core library modules for the taskboard client.
//!
//! - **Domain**: task model, board partition, optimistic reconciliation
//! - **Infrastructure**: configuration, data storage, HTTP, secure token storage
//! - **User Interface**: messages, console tables, logging
//!
//! ## Usage
//!
//! ```rust
//! use taskboard::libs::board::Board;
//! use taskboard::libs::task::{Status, Task};
//!
//! let board = Board::partition(vec![Task::new("1", "Write docs", Status::Pending)]);
//! assert_eq!(board.column(Status::Pending).len(), 1);
//! ```

pub mod board;
pub mod config;
pub mod data_storage;
pub mod events;
pub mod http;
pub mod logging;
pub mod messages;
pub mod secret;
pub mod sync;
pub mod task;
pub mod view;
