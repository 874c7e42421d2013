//! In-memory three-column board.
//!
//! A [`Board`] partitions tasks by [`Status`] into ordered columns. Every
//! operation returns a new board and leaves `self` untouched, which is what
//! lets the reconciler keep a snapshot to roll back to.
//!
//! Invariants kept by every constructor and operation:
//! - each task sits in exactly one column;
//! - a task's status equals the key of the column holding it.

use super::task::{Status, Task};
use thiserror::Error;

/// Position of a card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub column: Status,
    pub index: usize,
}

impl Location {
    pub fn new(column: Status, index: usize) -> Self {
        Self { column, index }
    }
}

/// A drag from one location to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub source: Location,
    pub destination: Location,
}

impl Move {
    pub fn new(source: Location, destination: Location) -> Self {
        Self { source, destination }
    }

    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }

    pub fn is_reorder(&self) -> bool {
        self.source.column == self.destination.column
    }

    /// The move that puts the card back where it came from.
    pub fn inverse(&self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no task at index {index} of column '{column}' (column holds {len})")]
    SourceOutOfRange { column: Status, index: usize, len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pending: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl Board {
    /// Groups a flat task list into columns, keeping the order received.
    ///
    /// Tasks whose status is not one of the board columns are left out. They
    /// still exist in storage; the board simply does not show them.
    pub fn partition<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        let mut board = Self::default();
        for task in tasks {
            if let Some(column) = task.status.column() {
                board.column_mut(column).push(task);
            }
        }
        board
    }

    pub fn column(&self, status: Status) -> &[Task] {
        match status {
            Status::Pending => &self.pending,
            Status::InProgress => &self.in_progress,
            Status::Completed => &self.completed,
        }
    }

    fn column_mut(&mut self, status: Status) -> &mut Vec<Task> {
        match status {
            Status::Pending => &mut self.pending,
            Status::InProgress => &mut self.in_progress,
            Status::Completed => &mut self.completed,
        }
    }

    /// Columns in display order, each paired with its key.
    pub fn columns(&self) -> impl Iterator<Item = (Status, &[Task])> {
        Status::ALL.into_iter().map(move |status| (status, self.column(status)))
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn locate(&self, id: &str) -> Option<Location> {
        self.columns().find_map(|(status, tasks)| {
            tasks.iter().position(|task| task.id == id).map(|index| Location::new(status, index))
        })
    }

    pub fn task_at(&self, location: Location) -> Option<&Task> {
        self.column(location.column).get(location.index)
    }

    /// Result of dropping the card at `mv.source` onto `mv.destination`.
    ///
    /// Within one column the card is reinserted at the destination index.
    /// Across columns it is inserted into the destination column with its
    /// status rewritten to that column. A destination index past the end
    /// appends.
    pub fn apply_move(&self, mv: &Move) -> Result<Board, BoardError> {
        let Move { source, destination } = *mv;
        let source_len = self.column(source.column).len();
        if source.index >= source_len {
            return Err(BoardError::SourceOutOfRange {
                column: source.column,
                index: source.index,
                len: source_len,
            });
        }
        if mv.is_noop() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let task = next.column_mut(source.column).remove(source.index);
        let task = if mv.is_reorder() { task } else { task.with_status(destination.column) };

        let target = next.column_mut(destination.column);
        let index = destination.index.min(target.len());
        target.insert(index, task);

        Ok(next)
    }

    /// Board without the card at `location`, plus the removed task.
    pub fn remove(&self, location: Location) -> Result<(Board, Task), BoardError> {
        let len = self.column(location.column).len();
        if location.index >= len {
            return Err(BoardError::SourceOutOfRange {
                column: location.column,
                index: location.index,
                len,
            });
        }
        let mut next = self.clone();
        let task = next.column_mut(location.column).remove(location.index);
        Ok((next, task))
    }
}

