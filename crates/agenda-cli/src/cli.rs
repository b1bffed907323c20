//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From` impls:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Agenda
//! ```
//!
//! [`Cli`] runs one command against a started [`Agenda`] and renders the
//! result as markdown. Mutating commands print a confirmation followed by the
//! reloaded task list.

use agenda_core::{
    Agenda, AgendaError, CreateResult, DeleteResult, LogFilter, Priority, Tab, UpdateResult,
    params::{AddTask, Id, SetLink, SetPercentage, SetPriority, ShowHistory},
};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::debug;

use crate::{args::Commands, renderer::TerminalRenderer};

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub text: String,
    /// Optional description shown in the task's detail panel
    #[arg(short, long, help = "Optional description shown in the detail panel")]
    pub description: Option<String>,
    /// Optional URL attached to the task
    #[arg(short, long, help = "Optional URL attached to the task")]
    pub link: Option<String>,
    /// Priority of the task; medium when omitted
    #[arg(short, long, value_enum, help = "Priority of the task (default: medium)")]
    pub priority: Option<PriorityArg>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            text: val.text,
            description: val.description,
            link: val.link,
            priority: val.priority.map(Priority::from),
        }
    }
}

/// Operate on a single task
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a task's priority
#[derive(Args)]
pub struct SetPriorityArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    #[arg(value_enum, help = "New priority")]
    pub priority: PriorityArg,
}

impl From<SetPriorityArgs> for SetPriority {
    fn from(val: SetPriorityArgs) -> Self {
        SetPriority {
            id: val.id,
            priority: val.priority.into(),
        }
    }
}

/// Set or clear a task's link
#[derive(Args)]
pub struct SetLinkArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    #[arg(help = "URL to attach; omit to clear the current link")]
    pub link: Option<String>,
}

impl From<SetLinkArgs> for SetLink {
    fn from(val: SetLinkArgs) -> Self {
        SetLink {
            id: val.id,
            link: val.link,
        }
    }
}

/// Set a task's completion percentage
#[derive(Args)]
pub struct SetPercentageArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    #[arg(
        allow_negative_numbers = true,
        help = "Completion percentage; values outside 0-100 are clamped"
    )]
    pub percentage: i64,
}

impl From<SetPercentageArgs> for SetPercentage {
    fn from(val: SetPercentageArgs) -> Self {
        SetPercentage {
            id: val.id,
            percentage: val.percentage,
        }
    }
}

/// Show the activity log
#[derive(Args)]
pub struct HistoryArgs {
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = FilterArg::All,
        help = "Only show entries for this action"
    )]
    pub filter: FilterArg,
}

impl From<HistoryArgs> for ShowHistory {
    fn from(val: HistoryArgs) -> Self {
        ShowHistory {
            filter: val.filter.into(),
        }
    }
}

/// Command-line representation of task priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Command-line representation of history filters
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Added,
    Completed,
    Deleted,
}

impl From<FilterArg> for LogFilter {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => LogFilter::All,
            FilterArg::Added => LogFilter::Added,
            FilterArg::Completed => LogFilter::Completed,
            FilterArg::Deleted => LogFilter::Deleted,
        }
    }
}

impl std::fmt::Display for FilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LogFilter::from(*self))
    }
}

/// Runs commands against an agenda and renders the results.
pub struct Cli {
    agenda: Agenda,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(agenda: Agenda, renderer: TerminalRenderer) -> Self {
        Self { agenda, renderer }
    }

    /// Dispatches a command; no command lists the tasks.
    pub async fn run(mut self, command: Option<Commands>) -> Result<()> {
        match command.unwrap_or(Commands::List) {
            Commands::List => self.list_tasks(),
            Commands::Add(args) => self.add_task(&args.into()).await,
            Commands::Toggle(args) => self.toggle_task(&args.into()).await,
            Commands::Delete(args) => self.delete_task(&args.into()).await,
            Commands::Priority(args) => self.set_priority(&args.into()).await,
            Commands::Link(args) => self.set_link(&args.into()).await,
            Commands::Progress(args) => self.set_percentage(&args.into()).await,
            Commands::Show(args) => self.show_task(&args.into()),
            Commands::History(args) => self.show_history(&args.into()),
            Commands::Week => self.show_week(),
        }
    }

    /// Switches to the current-week tab and renders the sorted task list.
    fn list_tasks(&mut self) -> Result<()> {
        self.agenda.select_tab(Tab::Current);
        self.renderer.render(&self.agenda.render_active_tab()?)
    }

    async fn add_task(&mut self, params: &AddTask) -> Result<()> {
        let task = self
            .agenda
            .add_task(params)
            .await
            .context("Could not add the task")?;
        self.renderer.render(&CreateResult::new(task).to_string())?;
        self.list_tasks()
    }

    async fn toggle_task(&mut self, params: &Id) -> Result<()> {
        let task = self
            .agenda
            .toggle_task(params)
            .await
            .with_context(|| format!("Failed to toggle task {}", params.id))?;
        let change = if task.completed {
            "completed"
        } else {
            "reopened"
        };
        self.render_update(task.id, vec![change.to_string()])
    }

    async fn delete_task(&mut self, params: &Id) -> Result<()> {
        let task = self
            .agenda
            .delete_task(params)
            .await
            .context("Could not delete the task")?;
        self.renderer.render(&DeleteResult::new(task).to_string())?;
        self.list_tasks()
    }

    async fn set_priority(&mut self, params: &SetPriority) -> Result<()> {
        self.agenda
            .set_priority(params)
            .await
            .with_context(|| format!("Failed to change priority of task {}", params.id))?;
        self.render_update(params.id, vec![format!("priority: {}", params.priority)])
    }

    async fn set_link(&mut self, params: &SetLink) -> Result<()> {
        self.agenda
            .set_link(params)
            .await
            .with_context(|| format!("Failed to update link of task {}", params.id))?;
        let change = match self.agenda.find_task(params.id).and_then(|t| t.link.as_deref()) {
            Some(link) => format!("link: {link}"),
            None => "link cleared".to_string(),
        };
        self.render_update(params.id, vec![change])
    }

    async fn set_percentage(&mut self, params: &SetPercentage) -> Result<()> {
        let percentage = self
            .agenda
            .set_percentage(params)
            .await
            .with_context(|| format!("Failed to update progress of task {}", params.id))?;
        self.render_update(params.id, vec![format!("progress: {percentage}%")])
    }

    fn show_task(&self, params: &Id) -> Result<()> {
        let detail = self
            .agenda
            .task_detail(params.id)
            .ok_or(AgendaError::TaskNotFound { id: params.id })?;
        self.renderer.render(&detail.to_string())
    }

    fn show_history(&mut self, params: &ShowHistory) -> Result<()> {
        self.agenda.select_tab(Tab::History);
        self.agenda.select_filter(params.filter);
        debug!("Showing history filtered by {}", params.filter);
        self.renderer.render(&self.agenda.render_active_tab()?)
    }

    fn show_week(&self) -> Result<()> {
        let week = self.agenda.week_info()?;
        self.renderer.render(&week.to_string())
    }

    fn render_update(&mut self, id: u64, changes: Vec<String>) -> Result<()> {
        self.renderer
            .render(&UpdateResult::with_changes(id, changes).to_string())?;
        self.list_tasks()
    }
}
