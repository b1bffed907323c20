//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::{error::Result, store::Document};

/// Name of the document collection holding tasks.
pub const TASKS_COLLECTION: &str = "tasks";

/// Represents a single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned by the document store
    #[serde(default)]
    pub id: u64,

    /// Short title of the task
    pub text: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional URL attached to the task
    #[serde(default)]
    pub link: Option<String>,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// Priority; absent means medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Completion percentage in 0..=100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,
}

impl Task {
    /// Effective priority, defaulting to medium.
    pub fn priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Effective completion percentage, defaulting to zero.
    ///
    /// Stored values above 100 read as 100.
    pub fn percentage(&self) -> u8 {
        self.percentage.unwrap_or(0).min(100)
    }

    /// Whether the task has an expandable detail panel.
    pub fn has_details(&self) -> bool {
        self.description.is_some() || self.link.is_some()
    }

    /// Serializes the task as a store record, without its identifier.
    pub fn to_record(&self) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("id");
        }
        Ok(value)
    }

    /// Decodes a task from a store document.
    pub fn from_document(document: Document) -> Result<Self> {
        let mut task: Task = serde_json::from_value(document.data)?;
        task.id = document.id;
        Ok(task)
    }
}

/// Clamps a directly entered completion percentage into `0..=100`.
///
/// ```rust
/// use agenda_core::models::clamp_percentage;
///
/// assert_eq!(clamp_percentage(-5), 0);
/// assert_eq!(clamp_percentage(42), 42);
/// assert_eq!(clamp_percentage(250), 100);
/// ```
pub fn clamp_percentage(value: i64) -> u8 {
    // The clamp guarantees the value fits.
    value.clamp(0, 100) as u8
}

/// Normalizes optional free-text input: trimmed, empty becomes `None`.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
