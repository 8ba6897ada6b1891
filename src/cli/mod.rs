//! Command-line interface for blah
//!
//! Provides `fetch` and `what-is-this` subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, CliOverrides};

mod fetch;
mod what_is_this;

/// Fetch Git and Mercurial working copies from <vcs>+<uri>[#<revision>] URIs
#[derive(Parser)]
#[command(name = "blah")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (blah.toml or .blah.yml)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Git executable to run
    #[arg(long, value_name = "PROGRAM", global = true)]
    git_command: Option<String>,

    /// Mercurial executable to run
    #[arg(long, value_name = "PROGRAM", global = true)]
    hg_command: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone or update a working copy, then check out a revision
    Fetch(fetch::FetchArgs),

    /// Print the repository URI of the working copy containing a directory
    WhatIsThis(what_is_this::WhatIsThisArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Fetch(args) => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let overrides =
                CliOverrides { git_command: cli.git_command, hg_command: cli.hg_command };
            let config = load_config(&cwd, cli.config.as_deref(), &overrides)?;
            fetch::run(args, &config)
        }
        Commands::WhatIsThis(args) => what_is_this::run(args),
    }
}
