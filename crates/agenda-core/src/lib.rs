//! Core library for the Agenda weekly to-do list.
//!
//! This crate provides the controller, domain models, view models and the
//! persistence adapters for a single-user task list with an activity log.
//! Completed tasks are cleared automatically when a new ISO week starts.
//!
//! # Architecture
//!
//! - **Controller** ([`agenda`]): explicit UI state plus async operations that
//!   write through to the store and reload
//! - **Persistence** ([`store`], [`db`], [`storage`]): a document store over
//!   SQLite and a JSON key/value file for local state
//! - **View models** ([`view`]): sorting, filtering and week information,
//!   independent of any output target
//! - **Display** ([`display`]): markdown rendering of view models and
//!   operation results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use agenda_core::{AgendaBuilder, LogFilter, params::{AddTask, Id}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut agenda = AgendaBuilder::new()
//!     .with_database_path(Some("agenda.db"))
//!     .build()
//!     .await?;
//! agenda.startup().await;
//!
//! let task = agenda
//!     .add_task(&AddTask {
//!         text: "Renew passport".to_string(),
//!         link: Some("https://example.com/passport".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! agenda.toggle_task(&Id { id: task.id }).await?;
//!
//! agenda.select_filter(LogFilter::Completed);
//! println!("{}", agenda.history());
//! # Ok(())
//! # }
//! ```

pub mod agenda;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;
pub mod view;
pub mod week;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaBuilder, AgendaState, RolloverReport};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use error::{AgendaError, Result};
pub use models::{LogAction, LogEntry, LogFilter, Priority, Tab, Task};
pub use params::{AddTask, Id, SetLink, SetPercentage, SetPriority, ShowHistory};
pub use storage::LocalStorage;
pub use store::{Document, DocumentStore, KeyValueStore};
pub use view::{HistoryView, TaskDetail, TaskListView, WeekInfo};
pub use week::WeekKey;
