//! What-is-this command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::vcs::detect::find_repository;

#[derive(Args)]
pub struct WhatIsThisArgs {
    /// Directory to inspect (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,
}

pub fn run(args: WhatIsThisArgs) -> Result<()> {
    let directory = match args.directory {
        Some(directory) => directory,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let root = directory
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", directory.display()))?;

    match find_repository(&root) {
        Some(repository) => println!("{}", repository.uri()),
        None => println!("Could not find source control repository"),
    }
    Ok(())
}
