//! Fetch command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Args)]
pub struct FetchArgs {
    /// Repository to fetch, e.g. git+https://example.com/project.git#v2
    #[arg(value_name = "REPOSITORY-URI")]
    pub repository_uri: String,

    /// Directory to clone into, or existing checkout to update
    #[arg(value_name = "LOCAL-PATH")]
    pub local_path: PathBuf,
}

pub fn run(args: FetchArgs, config: &Config) -> Result<()> {
    let outcome = crate::fetch::fetch(&args.repository_uri, &args.local_path, config)
        .context("fetch failed")?;
    tracing::info!(
        action = ?outcome.action,
        vcs = %outcome.vcs,
        revision = %outcome.revision,
        path = %args.local_path.display(),
        "fetch complete"
    );
    Ok(())
}
