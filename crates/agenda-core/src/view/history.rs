//! History view model: filtered and deduplicated log entries.

use std::collections::HashSet;

use crate::models::{LogEntry, LogFilter};

/// Applies `filter` to `logs`, preserving their order.
///
/// With [`LogFilter::Completed`] only the first entry per distinct task title
/// is kept, hiding repeated completions of the same task. Since logs load
/// newest first, that is the latest completion. Other filters keep
/// duplicates.
pub fn filter_logs(logs: &[LogEntry], filter: LogFilter) -> Vec<&LogEntry> {
    let mut seen_titles = HashSet::new();
    logs.iter()
        .filter(|entry| filter.matches(entry.action))
        .filter(|entry| {
            filter != LogFilter::Completed || seen_titles.insert(entry.task_title.as_str())
        })
        .collect()
}

/// The activity log as shown on the history tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryView {
    pub filter: LogFilter,
    pub entries: Vec<LogEntry>,
}

impl HistoryView {
    pub fn new(logs: &[LogEntry], filter: LogFilter) -> Self {
        Self {
            filter,
            entries: filter_logs(logs, filter).into_iter().cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
