//! Renderer-independent view models.
//!
//! The controller exposes its state through these types. They hold the
//! presentation rules (task ordering, log filtering and deduplication, week
//! information) so those rules can be tested without any output target.
//! Their `Display` impls in [`crate::display::views`] produce markdown.

pub mod history;
pub mod tasks;
pub mod week;

pub use history::{HistoryView, filter_logs};
pub use tasks::{TaskDetail, TaskListView, TaskRow, sort_tasks};
pub use week::WeekInfo;
