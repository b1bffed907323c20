//! High-level agenda API: the controller for tasks and the activity log.
//!
//! The [`Agenda`] owns the UI state that a front end renders (loaded tasks,
//! loaded log entries, selected tab and history filter) and coordinates the
//! document store and local storage.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    Store ops    │    │  DocumentStore  │
//! │ (task_handlers, │───▶│  (spawn_blocking│───▶│   (via db/)     │
//! │  rollover, logs)│    │   per request)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Agenda`] instances with configuration
//! - [`task_handlers`]: Task mutations and loading
//! - [`log_ops`]: Activity log writes and loading
//! - [`rollover`]: Weekly cleanup of completed tasks
//! - [`store_ops`]: Async wrappers over the blocking document store
//!
//! # Usage
//!
//! ```rust,no_run
//! use agenda_core::{AgendaBuilder, params::AddTask};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut agenda = AgendaBuilder::new()
//!     .with_database_path(Some("agenda.db"))
//!     .with_storage_path(Some("local.json"))
//!     .build()
//!     .await?;
//!
//! // Rollover check, then load tasks and logs.
//! agenda.startup().await;
//!
//! agenda
//!     .add_task(&AddTask {
//!         text: "Plan the week".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("{}", agenda.task_list());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::error;

pub mod builder;
pub mod log_ops;
pub mod rollover;
pub mod store_ops;
pub mod task_handlers;

#[cfg(test)]
mod tests;

pub use builder::AgendaBuilder;
pub use rollover::RolloverReport;

use crate::{
    error::Result,
    models::{LogEntry, LogFilter, Tab, Task},
    storage::LocalStorage,
    view::{HistoryView, TaskDetail, TaskListView, WeekInfo},
};

/// UI state held by the controller.
#[derive(Debug, Clone, Default)]
pub struct AgendaState {
    /// Tasks in store order (newest first)
    pub tasks: Vec<Task>,
    /// Log entries, newest first
    pub logs: Vec<LogEntry>,
    pub tab: Tab,
    pub filter: LogFilter,
}

/// Main controller for tasks and the activity log.
pub struct Agenda {
    pub(crate) db_path: PathBuf,
    pub(crate) storage: LocalStorage,
    pub(crate) state: AgendaState,
}

impl Agenda {
    /// Creates an agenda over the given database and local storage.
    pub(crate) fn new(db_path: PathBuf, storage: LocalStorage) -> Self {
        Self {
            db_path,
            storage,
            state: AgendaState::default(),
        }
    }

    /// Runs the weekly rollover check, then loads tasks and logs.
    ///
    /// A failed rollover is logged and does not prevent loading.
    pub async fn startup(&mut self) {
        if let Err(e) = self.check_week_rollover().await {
            error!("Weekly cleanup failed: {e}");
        }
        self.reload().await;
    }

    /// Reloads tasks and logs from the store.
    pub async fn reload(&mut self) {
        self.load_tasks().await;
        self.load_logs().await;
    }

    pub fn state(&self) -> &AgendaState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.state.logs
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.state.tab = tab;
    }

    pub fn select_filter(&mut self, filter: LogFilter) {
        self.state.filter = filter;
    }

    /// The sorted task list.
    pub fn task_list(&self) -> TaskListView {
        TaskListView::new(&self.state.tasks)
    }

    /// The detail panel for one loaded task.
    pub fn task_detail(&self, id: u64) -> Option<TaskDetail> {
        self.find_task(id).cloned().map(TaskDetail::new)
    }

    /// The history view under the current filter.
    pub fn history(&self) -> HistoryView {
        HistoryView::new(&self.state.logs, self.state.filter)
    }

    /// Week information for the current local date.
    pub fn week_info(&self) -> Result<WeekInfo> {
        WeekInfo::current()
    }

    /// Markdown for the selected tab: the week line and task list, or the
    /// history under the current filter.
    pub fn render_active_tab(&self) -> Result<String> {
        match self.state.tab {
            Tab::Current => Ok(format!("{}\n{}", self.week_info()?, self.task_list())),
            Tab::History => Ok(self.history().to_string()),
        }
    }
}
