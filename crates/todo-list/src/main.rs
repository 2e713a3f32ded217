//! CLI entry point for todo-list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

use config::ProjectConfig;

mod commands;
mod config;

/// In-memory todo lists seeded from configuration.
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "todo: render and update a todo list seeded from .todo/config.toml"
)]
struct Cli {
    /// Config file to seed the list from (defaults to .todo/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the list.
    Show {
        /// Print the list as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Mark the item at an index done.
    Done { index: usize },

    /// Mark the item at an index not done.
    Undone { index: usize },

    /// Mark the first item with this exact title done.
    DoneTitle { title: String },

    /// Remove the item at an index.
    Remove { index: usize },

    /// Mark every item done.
    AllDone,

    /// Mark every item not done.
    AllUndone,

    /// List items that are not done.
    Pending,

    /// List items that are done.
    Completed,

    /// Show the first item with this exact title.
    Find { title: String },

    /// Run the built-in sample: six todos, all marked done.
    Demo,
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let output = execute_command(config, cmd)?;
    println!("{output}");
    Ok(())
}

fn execute_command(config_path: Option<PathBuf>, command: Command) -> Result<String> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let config = ProjectConfig::load(config_path.as_deref(), &cwd)?;
    let mut list = config.list.build()?;
    info!(title = list.title(), items = list.len(), "seeded list");
    commands::run(command, &mut list)
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Show { json: true })
}

fn install_tracing() {
    // RUST_LOG overrides the INFO default.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
