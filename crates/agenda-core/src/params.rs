//! Parameter structures for agenda operations.
//!
//! These structures are shared by every interface without framework-specific
//! derives. The CLI defines its own clap argument types and converts them
//! into these with `From` impls:
//!
//! ```text
//! CLI Args (clap) → Core Params → Agenda
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{LogFilter, Priority};

/// Generic parameters for operations requiring just a task ID.
///
/// Used for toggle, delete and show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: u64,
}

/// Parameters for adding a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTask {
    /// Title of the task; must not be blank
    pub text: String,
    /// Optional description, stored trimmed
    pub description: Option<String>,
    /// Optional URL, stored trimmed
    pub link: Option<String>,
    /// Priority; left unset means medium
    pub priority: Option<Priority>,
}

/// Parameters for changing a task's priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPriority {
    pub id: u64,
    pub priority: Priority,
}

/// Parameters for setting or clearing a task's link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetLink {
    pub id: u64,
    /// New link; `None` or blank clears it
    pub link: Option<String>,
}

/// Parameters for setting a task's completion percentage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetPercentage {
    pub id: u64,
    /// Raw user entry; clamped into `0..=100`
    pub percentage: i64,
}

/// Parameters for the history view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowHistory {
    pub filter: LogFilter,
}
