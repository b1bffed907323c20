use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddTaskArgs, HistoryArgs, SetLinkArgs, SetPercentageArgs, SetPriorityArgs, TaskIdArgs,
};

/// Weekly to-do list with an activity log
///
/// Agenda keeps a single list of tasks for the current ISO week. Completed
/// tasks are cleared automatically the first time the tool runs in a new
/// week, and every add, completion and deletion is recorded in a history
/// that can be filtered by action.
#[derive(Parser)]
#[command(version, about, name = "agenda")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agenda/agenda.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the local state file (last seen week, cached tasks). Defaults
    /// to $XDG_DATA_HOME/agenda/local.json
    #[arg(long, global = true)]
    pub storage_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Agenda CLI
///
/// Running without a command lists the current week's tasks.
#[derive(Subcommand)]
pub enum Commands {
    /// List the current week's tasks
    #[command(alias = "ls")]
    List,
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Mark a task complete, or reopen a completed one
    #[command(alias = "t")]
    Toggle(TaskIdArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(TaskIdArgs),
    /// Change a task's priority
    #[command(alias = "p")]
    Priority(SetPriorityArgs),
    /// Set or clear a task's link
    Link(SetLinkArgs),
    /// Set a task's completion percentage
    #[command(alias = "pct")]
    Progress(SetPercentageArgs),
    /// Show the expanded details of a task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Show the activity log
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Show the current ISO week
    #[command(alias = "w")]
    Week,
}
