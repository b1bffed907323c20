//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Task;

/// Confirmation shown after a task is added.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added task with ID: {} ({})",
            self.resource.id,
            self.resource.text
        )
    }
}

/// Confirmation shown after a task is changed, listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<u64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updated task {}", self.resource)?;
        if !self.changes.is_empty() {
            write!(f, ": {}", self.changes.join(", "))?;
        }
        writeln!(f)
    }
}

/// Confirmation shown after a task is deleted.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task with ID: {} ({})",
            self.resource.id,
            self.resource.text
        )
    }
}
