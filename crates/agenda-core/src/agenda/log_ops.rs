//! Activity log operations for the Agenda.

use jiff::Zoned;
use log::{debug, error};

use super::{Agenda, store_ops};
use crate::models::{LogAction, LogEntry, Task};

impl Agenda {
    /// Records a lifecycle event for `task`.
    ///
    /// Logging never fails the action that triggered it: errors are reported
    /// through the `log` facade and otherwise dropped.
    pub async fn log_action(&self, action: LogAction, task: &Task) {
        self.log_action_at(action, task, &Zoned::now()).await;
    }

    pub(crate) async fn log_action_at(&self, action: LogAction, task: &Task, at: &Zoned) {
        let entry = match LogEntry::new(action, task, at) {
            Ok(entry) => entry,
            Err(e) => {
                error!("Failed to build {} log entry: {e}", action.as_str());
                return;
            }
        };
        record_entry(self.db_path.clone(), &entry).await;
    }

    /// Reloads the activity log, newest first.
    ///
    /// On failure the error is logged and the log view is left empty.
    pub async fn load_logs(&mut self) {
        match store_ops::fetch_logs(self.db_path.clone()).await {
            Ok(logs) => {
                debug!("Loaded {} log entries", logs.len());
                self.state.logs = logs;
            }
            Err(e) => {
                error!("Failed to load logs: {e}");
                self.state.logs.clear();
            }
        }
    }
}

/// Appends `entry`, logging instead of returning any failure.
pub(crate) async fn record_entry(db_path: std::path::PathBuf, entry: &LogEntry) {
    if let Err(e) = store_ops::append_log(db_path, entry).await {
        error!(
            "Failed to record {} log entry for '{}': {e}",
            entry.action.as_str(),
            entry.task_title
        );
    }
}
