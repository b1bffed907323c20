//! Data models for tasks and the activity log.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]; sorting and filtering for presentation live in
//! [`crate::view`].
//!
//! Models serialize with camelCase field names, which is the document layout
//! used in the `tasks` and `logs` collections.
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::models::{Priority, Task};
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1,
//!     text: "Write weekly report".to_string(),
//!     description: None,
//!     link: Some("https://example.com/report".to_string()),
//!     completed: false,
//!     priority: Some(Priority::High),
//!     percentage: None,
//!     created_at: Timestamp::now(),
//! };
//! assert!(task.has_details());
//! assert_eq!(task.percentage(), 0);
//! ```

pub mod filters;
pub mod log;
pub mod priority;
pub mod task;

#[cfg(test)]
mod tests;

pub use filters::{LogFilter, Tab};
pub use log::{AUTO_CLEANUP_REASON, LOGS_COLLECTION, LogAction, LogEntry};
pub use priority::Priority;
pub use task::{TASKS_COLLECTION, Task, clamp_percentage};
