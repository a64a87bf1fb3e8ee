//! Recipe builder CLI
//!
//! Command-line interface for building recipes with draft saving.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListArgs};
use log::info;
use recipe_core::{DraftStoreBuilder, Settings, SettingsUpdate, Timings};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        theme,
        latency,
        command,
    } = Args::parse();

    let mut settings = Settings::default();
    settings.update(SettingsUpdate {
        theme: theme.map(Into::into),
        timings: latency.map(|ms| Timings::default().with_latency(Duration::from_millis(ms))),
    });

    let store = DraftStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open recipe storage")?;

    let renderer = TerminalRenderer::new(!no_color, settings.theme);
    let cli = Cli::new(store, settings, renderer);

    info!("Recipe builder started");

    match command {
        Some(List(args)) => cli.list(args).await,
        Some(Status) => cli.status(),
        Some(Draft { command }) => cli.handle_draft_command(command),
        Some(Create(args)) => cli.create(args).await,
        Some(Edit(args)) => cli.edit(args).await,
        None => cli.list(ListArgs::default()).await,
    }
}
