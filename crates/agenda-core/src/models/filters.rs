//! Selection state for the history view and the active tab.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::LogAction;

/// Filter applied to the activity log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFilter {
    /// Every entry, duplicates included
    #[default]
    All,
    Added,
    /// Completion entries, at most one per task title
    Completed,
    Deleted,
}

impl LogFilter {
    /// Whether an entry with the given action passes this filter.
    pub fn matches(&self, action: LogAction) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Added => action == LogAction::Added,
            LogFilter::Completed => action == LogAction::Completed,
            LogFilter::Deleted => action == LogAction::Deleted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFilter::All => "all",
            LogFilter::Added => "added",
            LogFilter::Completed => "completed",
            LogFilter::Deleted => "deleted",
        }
    }
}

impl FromStr for LogFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(LogFilter::All),
            "added" => Ok(LogFilter::Added),
            "completed" => Ok(LogFilter::Completed),
            "deleted" => Ok(LogFilter::Deleted),
            _ => Err(format!("Invalid log filter: {s}")),
        }
    }
}

/// The two top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Current week's task list
    #[default]
    Current,
    /// Activity log
    History,
}
