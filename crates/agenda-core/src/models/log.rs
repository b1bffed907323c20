//! Activity log entries.

use std::str::FromStr;

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use super::Task;
use crate::{error::Result, store::Document, week};

/// Name of the document collection holding log entries.
pub const LOGS_COLLECTION: &str = "logs";

/// Reason recorded on entries written by the weekly cleanup.
pub const AUTO_CLEANUP_REASON: &str = "Automatic cleanup at start of new week";

/// Kind of task lifecycle event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogAction {
    Added,
    Completed,
    Deleted,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::Added => "added",
            LogAction::Completed => "completed",
            LogAction::Deleted => "deleted",
        }
    }

    /// Human readable label used in the history view.
    pub fn label(&self) -> &'static str {
        match self {
            LogAction::Added => "+ Added",
            LogAction::Completed => "✓ Completed",
            LogAction::Deleted => "✗ Deleted",
        }
    }
}

impl FromStr for LogAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "added" => Ok(LogAction::Added),
            "completed" => Ok(LogAction::Completed),
            "deleted" => Ok(LogAction::Deleted),
            _ => Err(format!("Invalid log action: {s}")),
        }
    }
}

/// Append-only record of something that happened to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Identifier assigned by the document store
    #[serde(default)]
    pub id: u64,

    pub action: LogAction,

    /// Task title at the time of the event
    pub task_title: String,

    #[serde(default)]
    pub task_description: Option<String>,

    #[serde(default)]
    pub task_link: Option<String>,

    /// When the event happened
    pub timestamp: Timestamp,

    /// Local midnight of the Monday starting the event's ISO week
    pub week_start: Timestamp,

    /// ISO-8601 week number
    pub week_number: i8,

    /// ISO-8601 week-numbering year
    pub year: i16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LogEntry {
    /// Builds an entry snapshotting `task` at time `at`.
    pub fn new(action: LogAction, task: &Task, at: &Zoned) -> Result<Self> {
        let key = week::WeekKey::of(at.date());
        Ok(Self {
            id: 0,
            action,
            task_title: task.text.clone(),
            task_description: task.description.clone(),
            task_link: task.link.clone(),
            timestamp: at.timestamp(),
            week_start: week::week_start(at)?,
            week_number: key.week,
            year: key.year,
            auto_deleted: None,
            reason: None,
        })
    }

    /// Marks the entry as written by the automatic weekly cleanup.
    pub fn auto_deleted(mut self, reason: impl Into<String>) -> Self {
        self.auto_deleted = Some(true);
        self.reason = Some(reason.into());
        self
    }

    pub fn is_auto_deleted(&self) -> bool {
        self.auto_deleted.unwrap_or(false)
    }

    /// Serializes the entry as a store record, without its identifier.
    pub fn to_record(&self) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("id");
        }
        Ok(value)
    }

    /// Decodes an entry from a store document.
    pub fn from_document(document: Document) -> Result<Self> {
        let mut entry: LogEntry = serde_json::from_value(document.data)?;
        entry.id = document.id;
        Ok(entry)
    }
}
