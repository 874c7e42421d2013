use super::board::Board;
use super::task::{Status, Task};
use anyhow::Result;
use chrono::{DateTime, Utc};
use prettytable::{format, row, Cell, Row, Table};

pub const NO_DUE_DATE: &str = "No due date";

pub struct View {}

impl View {
    /// Flat listing used by `list`.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();
        Ok(())
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "DUE", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.status,
                format_due(task.due_date.as_ref()),
                task.description.as_deref().unwrap_or("")
            ]);
        }

        table
    }

    /// Three columns side by side, one card per cell.
    pub fn board(board: &Board) -> Result<()> {
        Self::board_table(board).printstd();
        Ok(())
    }

    pub fn board_table(board: &Board) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(Row::new(
            Status::ALL
                .iter()
                .map(|status| Cell::new(&format!("{} ({})", status.title(), board.column(*status).len())))
                .collect(),
        ));

        let depth = board.columns().map(|(_, tasks)| tasks.len()).max().unwrap_or(0);
        for index in 0..depth {
            table.add_row(Row::new(
                Status::ALL
                    .iter()
                    .map(|status| match board.column(*status).get(index) {
                        Some(task) => Cell::new(&card(index, task)),
                        None => Cell::new(""),
                    })
                    .collect(),
            ));
        }

        table
    }
}

fn card(index: usize, task: &Task) -> String {
    format!("{index}. {}\n   {}\n   {}", task.title, task.id, format_due(task.due_date.as_ref()))
}

/// `Jan 20, 2024`, or [`NO_DUE_DATE`].
pub fn format_due(due_date: Option<&DateTime<Utc>>) -> String {
    match due_date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => NO_DUE_DATE.to_string(),
    }
}
