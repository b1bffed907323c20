//! Task operations for the Agenda.
//!
//! Every mutation writes through to the document store and then reloads
//! tasks and logs; local state is never patched in place.

use jiff::Timestamp;
use log::{debug, error, info, warn};
use serde_json::json;

use super::{Agenda, store_ops};
use crate::{
    error::{AgendaError, Result},
    models::{LogAction, Task, clamp_percentage, task::non_empty},
    params::{AddTask, Id, SetLink, SetPercentage, SetPriority},
    storage::CACHED_TASKS_KEY,
    store::KeyValueStore,
};

impl Agenda {
    /// Adds a new task and records an `added` log entry.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::InvalidInput` for blank text, or the store error
    /// if the insert fails. Failures are meant to be shown to the user.
    pub async fn add_task(&mut self, params: &AddTask) -> Result<Task> {
        let text = params.text.trim();
        if text.is_empty() {
            return Err(AgendaError::invalid_input("text").with_reason("Task text must not be empty"));
        }

        let mut task = Task {
            id: 0,
            text: text.to_string(),
            description: non_empty(params.description.as_deref()),
            link: non_empty(params.link.as_deref()),
            completed: false,
            priority: params.priority,
            percentage: None,
            created_at: Timestamp::now(),
        };

        task.id = store_ops::insert_task(self.db_path.clone(), &task)
            .await
            .map_err(|e| {
                error!("Failed to add task '{}': {e}", task.text);
                e
            })?;
        info!("Added task {} '{}'", task.id, task.text);

        self.log_action(LogAction::Added, &task).await;
        self.reload().await;
        Ok(task)
    }

    /// Flips a task's completion flag.
    ///
    /// Completing a task forces its percentage to 100 and records a
    /// `completed` log entry; reopening leaves the percentage untouched.
    pub async fn toggle_task(&mut self, params: &Id) -> Result<Task> {
        let task = self.require_task(params.id)?;
        let completed = !task.completed;

        let partial = if completed {
            json!({ "completed": true, "percentage": 100 })
        } else {
            json!({ "completed": false })
        };
        self.write_task(task.id, partial).await?;

        if completed {
            self.log_action(LogAction::Completed, &task).await;
        }
        self.reload().await;
        self.require_task(task.id)
    }

    /// Deletes a task, recording a `deleted` log entry first.
    ///
    /// Returns the task as it was before deletion.
    pub async fn delete_task(&mut self, params: &Id) -> Result<Task> {
        let task = self.require_task(params.id)?;

        self.log_action(LogAction::Deleted, &task).await;

        let removed = store_ops::remove_task(self.db_path.clone(), task.id)
            .await
            .map_err(|e| {
                error!("Failed to delete task {}: {e}", task.id);
                e
            })?;
        if !removed {
            warn!("Task {} was already gone from the store", task.id);
        }
        info!("Deleted task {} '{}'", task.id, task.text);

        self.reload().await;
        Ok(task)
    }

    /// Changes a task's priority.
    pub async fn set_priority(&mut self, params: &SetPriority) -> Result<()> {
        self.write_task(params.id, json!({ "priority": params.priority }))
            .await?;
        self.reload().await;
        Ok(())
    }

    /// Sets a task's link; a blank or missing link clears it.
    pub async fn set_link(&mut self, params: &SetLink) -> Result<()> {
        let link = non_empty(params.link.as_deref());
        self.write_task(params.id, json!({ "link": link })).await?;
        self.reload().await;
        Ok(())
    }

    /// Sets a task's completion percentage, clamped into `0..=100`.
    pub async fn set_percentage(&mut self, params: &SetPercentage) -> Result<u8> {
        let percentage = clamp_percentage(params.percentage);
        if i64::from(percentage) != params.percentage {
            debug!(
                "Clamped percentage {} to {percentage} for task {}",
                params.percentage, params.id
            );
        }
        self.write_task(params.id, json!({ "percentage": percentage }))
            .await?;
        self.reload().await;
        Ok(percentage)
    }

    /// Reloads the task list, newest first.
    ///
    /// A successful load refreshes the local cache. When the store cannot be
    /// read the cached list is used instead, or the list is left empty.
    pub async fn load_tasks(&mut self) {
        match store_ops::fetch_tasks(self.db_path.clone()).await {
            Ok(tasks) => {
                debug!("Loaded {} tasks", tasks.len());
                if let Err(e) = self.cache_tasks(&tasks) {
                    warn!("Failed to cache tasks locally: {e}");
                }
                self.state.tasks = tasks;
            }
            Err(e) => {
                error!("Failed to load tasks: {e}");
                self.state.tasks = match self.cached_tasks() {
                    Ok(Some(tasks)) => {
                        info!("Using {} locally cached tasks", tasks.len());
                        tasks
                    }
                    Ok(None) => Vec::new(),
                    Err(e) => {
                        warn!("Failed to read cached tasks: {e}");
                        Vec::new()
                    }
                };
            }
        }
    }

    /// Looks a task up in the loaded state.
    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    fn require_task(&self, id: u64) -> Result<Task> {
        self.find_task(id)
            .cloned()
            .ok_or(AgendaError::TaskNotFound { id })
    }

    /// Writes a partial update, logging failures before returning them.
    async fn write_task(&self, id: u64, partial: serde_json::Value) -> Result<()> {
        store_ops::update_task(self.db_path.clone(), id, partial)
            .await
            .map_err(|e| {
                error!("Failed to update task {id}: {e}");
                e
            })
    }

    fn cache_tasks(&self, tasks: &[Task]) -> Result<()> {
        let encoded = serde_json::to_string(tasks)?;
        self.storage.set_item(CACHED_TASKS_KEY, &encoded)
    }

    fn cached_tasks(&self) -> Result<Option<Vec<Task>>> {
        match self.storage.get_item(CACHED_TASKS_KEY)? {
            Some(encoded) => Ok(Some(serde_json::from_str(&encoded)?)),
            None => Ok(None),
        }
    }
}
