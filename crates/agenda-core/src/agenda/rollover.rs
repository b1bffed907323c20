//! Weekly rollover: clears completed tasks when a new ISO week begins.

use std::fmt;

use jiff::Zoned;
use log::{error, info, warn};
use tokio::task::JoinSet;

use super::{Agenda, log_ops::record_entry, store_ops};
use crate::{
    error::{AgendaError, Result},
    models::{AUTO_CLEANUP_REASON, LogAction, LogEntry, Task},
    storage::LAST_WEEK_KEY,
    store::KeyValueStore,
    week::WeekKey,
};

/// Outcome of a rollover check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloverReport {
    /// Week key stored by the previous startup, if any
    pub previous: Option<String>,
    /// Week key of the current date
    pub current: WeekKey,
    /// Number of completed tasks deleted
    pub removed: usize,
}

impl RolloverReport {
    /// Whether this check crossed into a new week.
    pub fn is_new_week(&self) -> bool {
        self.previous
            .as_deref()
            .is_some_and(|previous| previous != self.current.to_string())
    }
}

impl fmt::Display for RolloverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.previous {
            Some(previous) if self.is_new_week() => write!(
                f,
                "New week {} (was {previous}): removed {} completed task(s)",
                self.current, self.removed
            ),
            Some(_) => write!(f, "Still in week {}", self.current),
            None => write!(f, "First run in week {}", self.current),
        }
    }
}

impl Agenda {
    /// Runs the weekly rollover check for the current local time.
    pub async fn check_week_rollover(&mut self) -> Result<RolloverReport> {
        self.check_week_rollover_at(&Zoned::now()).await
    }

    /// Runs the weekly rollover check as of `now`.
    ///
    /// When the stored week key differs from the week of `now`, every task
    /// marked complete is deleted and an auto-deleted `deleted` entry is
    /// logged for each. Deletions run concurrently and are all awaited before
    /// the new key is stored. If any deletion fails the key is left as it
    /// was, so the next startup checks again; deletions that succeeded are
    /// not rolled back.
    ///
    /// A first run (no stored key) deletes nothing and only records the key.
    pub async fn check_week_rollover_at(&mut self, now: &Zoned) -> Result<RolloverReport> {
        let current = WeekKey::of(now.date());
        let current_key = current.to_string();
        let previous = self.storage.get_item(LAST_WEEK_KEY)?;

        let mut removed = 0;
        if let Some(previous_key) = previous.as_deref().filter(|key| *key != current_key) {
            info!("New week detected ({previous_key} -> {current_key}), removing completed tasks");
            let tasks = store_ops::fetch_all_tasks(self.db_path.clone()).await?;
            removed = self.remove_completed(completed_tasks(tasks), now).await?;
        }

        self.storage.set_item(LAST_WEEK_KEY, &current_key)?;

        let report = RolloverReport {
            previous,
            current,
            removed,
        };
        info!("{report}");
        Ok(report)
    }

    /// Deletes `tasks` concurrently, logging each deletion.
    pub(crate) async fn remove_completed(&self, tasks: Vec<Task>, now: &Zoned) -> Result<usize> {
        let mut deletions = JoinSet::new();
        for task in tasks {
            let db_path = self.db_path.clone();
            let now = now.clone();
            deletions.spawn(async move {
                if !store_ops::remove_task(db_path.clone(), task.id).await? {
                    warn!("Task {} was already gone from the store", task.id);
                    return Ok::<Option<u64>, AgendaError>(None);
                }
                match LogEntry::new(LogAction::Deleted, &task, &now) {
                    Ok(entry) => {
                        record_entry(db_path, &entry.auto_deleted(AUTO_CLEANUP_REASON)).await;
                    }
                    Err(e) => error!("Failed to build cleanup log entry for task {}: {e}", task.id),
                }
                Ok(Some(task.id))
            });
        }

        let mut removed = 0;
        let mut first_error = None;
        while let Some(joined) = deletions.join_next().await {
            match joined.map_err(AgendaError::join).and_then(|result| result) {
                Ok(Some(id)) => {
                    info!("Automatically removed completed task {id}");
                    removed += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Weekly cleanup failed to remove a task: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(removed),
        }
    }
}

/// Selects the tasks the rollover removes: those marked complete.
pub fn completed_tasks(tasks: Vec<Task>) -> Vec<Task> {
    tasks.into_iter().filter(|task| task.completed).collect()
}
