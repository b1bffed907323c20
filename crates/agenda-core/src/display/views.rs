//! Markdown rendering of the view models.
//!
//! These impls are the only place that decides what the task list, detail
//! panel, history and week line look like.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::view::{HistoryView, TaskDetail, TaskListView, TaskRow, WeekInfo};

/// Escapes markdown control characters in user text and folds line breaks
/// into spaces, so a title always stays on its own line.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '~' | '`' | '[' | ']' | '<' | '>' | '#' | '|' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn status_icon(completed: bool) -> &'static str {
    if completed { "✓" } else { "○" }
}

impl fmt::Display for TaskRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = escape_markdown(&self.text);
        let title = if self.completed {
            format!("~~{text}~~")
        } else {
            format!("**{text}**")
        };
        write!(
            f,
            "- {} {title} (ID: {}) · {} · {}%",
            status_icon(self.completed),
            self.id,
            self.priority.with_icon(),
            self.percentage
        )?;
        if self.has_details {
            write!(f, " ▸")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TaskListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.count_label())?;
        writeln!(f)?;
        if self.rows.is_empty() {
            return writeln!(f, "No tasks yet.");
        }
        for row in &self.rows {
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TaskDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        writeln!(f, "# {}. {}", task.id, escape_markdown(&task.text))?;
        writeln!(f)?;

        let status = if task.completed { "✓ Done" } else { "○ Open" };
        writeln!(f, "- Status: {status}")?;

        let options: Vec<String> = self
            .priority_options()
            .into_iter()
            .map(|(priority, selected)| {
                if selected {
                    format!("**[{priority}]**")
                } else {
                    priority.to_string()
                }
            })
            .collect();
        writeln!(f, "- Priority: {}", options.join(" · "))?;
        writeln!(f, "- Progress: {}", self.progress_bar())?;
        writeln!(f, "- Created: {}", LocalDateTime(&task.created_at))?;
        if let Some(link) = &task.link {
            writeln!(f, "- Link: {link}")?;
        }

        if let Some(desc) = &task.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for HistoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# History ({})", self.filter)?;
        writeln!(f)?;

        if self.entries.is_empty() {
            return writeln!(f, "No history entries found.");
        }

        for entry in &self.entries {
            writeln!(
                f,
                "## {} · {}",
                entry.action.label(),
                LocalDateTime(&entry.timestamp)
            )?;
            writeln!(f)?;
            writeln!(f, "**{}**", escape_markdown(&entry.task_title))?;
            writeln!(f)?;
            writeln!(
                f,
                "- Week of {} (W{} {})",
                LocalDate(&entry.week_start),
                entry.week_number,
                entry.year
            )?;
            if let Some(link) = &entry.task_link {
                writeln!(f, "- Link: {link}")?;
            }
            if let Some(reason) = entry.reason.as_ref().filter(|_| entry.is_auto_deleted()) {
                writeln!(f, "- Reason: {reason}")?;
            }
            if let Some(desc) = &entry.task_description {
                writeln!(f)?;
                writeln!(f, "{desc}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for WeekInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Week of {} ({})",
            self.monday.strftime("%A, %B %-d, %Y"),
            self.key
        )
    }
}
