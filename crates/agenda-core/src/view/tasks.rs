//! Task list and detail panel view models.

use crate::models::{Priority, Task};

/// Orders tasks for display.
///
/// Open tasks come before completed ones; open tasks are ranked high, then
/// medium, then low. The sort is stable, so ties keep the store order
/// (newest first) and completed tasks keep it entirely.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| {
        let rank = if task.completed {
            0
        } else {
            task.priority().rank()
        };
        (task.completed, rank)
    });
}

/// One line of the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub percentage: u8,
    /// Whether the row can be expanded into a detail panel
    pub has_details: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            priority: task.priority(),
            percentage: task.percentage(),
            has_details: task.has_details(),
        }
    }
}

/// The sorted task list shown on the current-week tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListView {
    pub rows: Vec<TaskRow>,
}

impl TaskListView {
    /// Builds the view from tasks in store order.
    pub fn new(tasks: &[Task]) -> Self {
        let mut sorted = tasks.to_vec();
        sort_tasks(&mut sorted);
        Self {
            rows: sorted.iter().map(TaskRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Number of tasks with a singular or plural noun, e.g. `3 tasks`.
    pub fn count_label(&self) -> String {
        let count = self.rows.len();
        format!("{count} task{}", if count > 1 { "s" } else { "" })
    }
}

/// Expanded panel for a single task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetail {
    pub task: Task,
}

/// Width of the textual completion slider.
const SLIDER_WIDTH: usize = 10;

impl TaskDetail {
    pub fn new(task: Task) -> Self {
        Self { task }
    }

    /// Priority selector entries, with the current one flagged.
    pub fn priority_options(&self) -> Vec<(Priority, bool)> {
        let current = self.task.priority();
        [Priority::High, Priority::Medium, Priority::Low]
            .into_iter()
            .map(|priority| (priority, priority == current))
            .collect()
    }

    /// Completion slider rendered as a bar, e.g. `[████░░░░░░] 40%`.
    pub fn progress_bar(&self) -> String {
        let percentage = usize::from(self.task.percentage());
        let filled = percentage * SLIDER_WIDTH / 100;
        format!(
            "[{}{}] {percentage}%",
            "█".repeat(filled),
            "░".repeat(SLIDER_WIDTH.saturating_sub(filled))
        )
    }
}
