//! Task data model shared by the board, the reconciler and the API clients.
//!
//! A [`Task`] is decoded straight from the task API. Its `status` is kept as a
//! [`TaskStatus`] so that values outside the three board columns survive
//! decoding; the board drops those when partitioning.
//!
//! Drafts ([`NewTask`]) and partial updates ([`TaskPatch`]) are validated
//! client-side with the same rules the server applies, so a bad request is
//! rejected before anything is sent.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Status {
    #[serde(rename = "pending")]
    #[value(name = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    #[value(name = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    #[value(name = "completed")]
    Completed,
}

impl Status {
    /// Columns in on-screen order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    /// Wire value, also used as the column key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    /// Column heading shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TaskError::InvalidStatus(s.to_string()))
    }
}

/// Status as stored on a task record.
///
/// Storage may hold values the board does not know about; those decode as
/// `Unrecognized` instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskStatus {
    Known(Status),
    Unrecognized(String),
}

impl TaskStatus {
    /// The board column this status maps to, if any.
    pub fn column(&self) -> Option<Status> {
        match self {
            TaskStatus::Known(status) => Some(*status),
            TaskStatus::Unrecognized(_) => None,
        }
    }
}

impl From<Status> for TaskStatus {
    fn from(status: Status) -> Self {
        TaskStatus::Known(status)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Known(status) => status.fmt(f),
            TaskStatus::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// A task record as returned by the task API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by storage.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default, with = "timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Task {
    /// Builds a task with only the fields the board cares about.
    pub fn new(id: &str, title: &str, status: Status) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            status: status.into(),
            due_date: None,
            created_at: None,
            user_id: None,
        }
    }

    /// Copy of this task with its status overwritten.
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status: status.into(),
            ..self.clone()
        }
    }
}

/// Which tasks to fetch from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    ByStatus(Status),
}

impl TaskFilter {
    pub fn status(&self) -> Option<Status> {
        match self {
            TaskFilter::All => None,
            TaskFilter::ByStatus(status) => Some(*status),
        }
    }
}

impl From<Option<Status>> for TaskFilter {
    fn from(status: Option<Status>) -> Self {
        status.map_or(TaskFilter::All, TaskFilter::ByStatus)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Status must be one of: pending, in-progress, completed (got '{0}')")]
    InvalidStatus(String),
    #[error("No fields provided to update")]
    NoFieldsToUpdate,
    #[error("Invalid due date '{0}', expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339")]
    InvalidDueDate(String),
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    #[serde(with = "timestamp")]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Normalises the draft and checks it is acceptable to the server.
    pub fn validate(self) -> Result<Self, TaskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: normalize_description(self.description),
            ..self
        })
    }
}

/// Body of a partial update. Absent fields are left untouched by the server.
///
/// `description` and `due_date` are doubly optional: `Some(None)` clears the
/// stored value, `None` leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none", with = "patch_timestamp")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Patch that only moves the task to another column.
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none() && self.due_date.is_none()
    }

    pub fn validate(self) -> Result<Self, TaskError> {
        if self.is_empty() {
            return Err(TaskError::NoFieldsToUpdate);
        }
        let title = match self.title {
            Some(title) if title.trim().is_empty() => return Err(TaskError::EmptyTitle),
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };
        Ok(Self {
            title,
            description: self.description.map(normalize_description),
            ..self
        })
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

/// Parses a due date typed by the user.
///
/// Accepts RFC 3339, a bare date (midnight UTC) or a `datetime-local` style
/// `YYYY-MM-DDTHH:MM`, which is read as local wall time.
pub fn parse_due_date(input: &str) -> Result<DateTime<Utc>, TaskError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Ok(local.with_timezone(&Utc));
            }
        }
    }
    Err(TaskError::InvalidDueDate(input.to_string()))
}

/// Lenient (de)serialisation for optional timestamps.
///
/// Storage returns `timestamptz` values as RFC 3339, but older rows and hand
/// written fixtures use naive date-times or plain dates.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Utc.from_utc_datetime(&naive));
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    pub fn serialize<S: Serializer>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw))),
        }
    }
}

mod patch_timestamp {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<Option<DateTime<Utc>>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(inner) => super::timestamp::serialize(inner, serializer),
            None => serializer.serialize_none(),
        }
    }
}
