//! Agenda CLI Application
//!
//! Command-line interface for the weekly to-do list. Every invocation runs
//! the weekly rollover check before handling its command.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use agenda_core::{AgendaBuilder, OperationStatus};
use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", OperationStatus::failure(format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        database_file,
        storage_file,
        no_color,
        command,
    } = args;

    let mut agenda = AgendaBuilder::new()
        .with_database_path(database_file)
        .with_storage_path(storage_file)
        .build()
        .await
        .context("Failed to initialize agenda")?;

    info!("Agenda started");
    agenda.startup().await;

    Cli::new(agenda, TerminalRenderer::new(!no_color))
        .run(command)
        .await
}
