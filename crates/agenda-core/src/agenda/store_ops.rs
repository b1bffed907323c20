//! Document store operations for the Agenda.
//!
//! Each call opens its own connection inside `spawn_blocking`, so these are
//! free functions over an owned database path and can run on spawned tasks.

use std::path::PathBuf;

use serde_json::Value;
use tokio::task;

use crate::{
    db::Database,
    error::{AgendaError, Result},
    models::{LOGS_COLLECTION, LogEntry, TASKS_COLLECTION, Task},
    store::DocumentStore,
};

/// Field the task list is ordered by.
const TASK_ORDER_FIELD: &str = "createdAt";

/// Field the activity log is ordered by.
const LOG_ORDER_FIELD: &str = "timestamp";

/// Runs `f` against a freshly opened database on the blocking pool.
async fn with_database<T, F>(db_path: PathBuf, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
{
    task::spawn_blocking(move || {
        let mut db = Database::new(&db_path)?;
        f(&mut db)
    })
    .await
    .map_err(AgendaError::join)?
}

/// Inserts a task record and returns the assigned id.
pub(crate) async fn insert_task(db_path: PathBuf, task: &Task) -> Result<u64> {
    let record = task.to_record()?;
    with_database(db_path, move |db| db.add_document(TASKS_COLLECTION, &record)).await
}

/// Lists tasks newest first.
pub(crate) async fn fetch_tasks(db_path: PathBuf) -> Result<Vec<Task>> {
    with_database(db_path, |db| {
        db.ordered_query(TASKS_COLLECTION, TASK_ORDER_FIELD, true)?
            .into_iter()
            .map(Task::from_document)
            .collect()
    })
    .await
}

/// Lists tasks without any ordering guarantee beyond insertion order.
pub(crate) async fn fetch_all_tasks(db_path: PathBuf) -> Result<Vec<Task>> {
    with_database(db_path, |db| {
        db.query(TASKS_COLLECTION)?
            .into_iter()
            .map(Task::from_document)
            .collect()
    })
    .await
}

/// Merges `partial` into a task, failing if the task does not exist.
pub(crate) async fn update_task(db_path: PathBuf, id: u64, partial: Value) -> Result<()> {
    let updated =
        with_database(db_path, move |db| db.update_document(TASKS_COLLECTION, id, &partial))
            .await?;
    if updated {
        Ok(())
    } else {
        Err(AgendaError::TaskNotFound { id })
    }
}

/// Deletes a task. Returns `false` when it was already gone.
pub(crate) async fn remove_task(db_path: PathBuf, id: u64) -> Result<bool> {
    with_database(db_path, move |db| db.delete_document(TASKS_COLLECTION, id)).await
}

/// Appends an entry to the activity log.
pub(crate) async fn append_log(db_path: PathBuf, entry: &LogEntry) -> Result<u64> {
    let record = entry.to_record()?;
    with_database(db_path, move |db| db.add_document(LOGS_COLLECTION, &record)).await
}

/// Lists log entries newest first.
pub(crate) async fn fetch_logs(db_path: PathBuf) -> Result<Vec<LogEntry>> {
    with_database(db_path, |db| {
        db.ordered_query(LOGS_COLLECTION, LOG_ORDER_FIELD, true)?
            .into_iter()
            .map(LogEntry::from_document)
            .collect()
    })
    .await
}
