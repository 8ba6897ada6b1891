//! Fetching working copies
//!
//! A fetch parses the repository URI, picks the registered VCS by scheme
//! name, clones into a missing path or updates an existing checkout of the
//! same remote, then checks out the requested revision.

use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::utils::{Executor, SystemExecutor};
use crate::vcs::{LocalRepository, Vcs, VcsKind};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

pub mod uri;

pub use uri::RepositoryUri;

/// How the working copy was brought up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchAction {
    Cloned,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub action: FetchAction,
    pub vcs: VcsKind,
    /// Revision handed to the checkout, after defaulting.
    pub revision: String,
}

/// Fetches into local paths using a fixed set of registered systems.
#[derive(Debug, Clone)]
pub struct Fetcher {
    systems: Vec<Vcs>,
}

impl Fetcher {
    /// Register every supported system, using the programs named in `config`.
    pub fn new(executor: Arc<dyn Executor>, config: &Config) -> Self {
        let systems = VcsKind::ALL
            .into_iter()
            .map(|kind| Vcs::new(kind, config.program_for(kind), executor.clone()))
            .collect();
        Self { systems }
    }

    /// Register exactly `systems`; URIs naming anything else are rejected.
    pub fn with_systems(systems: Vec<Vcs>) -> Self {
        Self { systems }
    }

    pub fn fetch(&self, uri_text: &str, local_path: &Path) -> FetchResult<FetchOutcome> {
        let uri = uri::parse(uri_text)?;
        let vcs = self.find_vcs(&uri.vcs)?;
        tracing::debug!(
            vcs = %vcs.kind(),
            repo_uri = %uri.repo_uri,
            path = %local_path.display(),
            "fetching"
        );

        let (repository, action) = fetch_all_revisions(vcs, &uri.repo_uri, local_path)?;

        let revision = uri.revision.unwrap_or_else(|| vcs.kind().default_branch().to_string());
        repository.checkout_revision(&revision)?;

        Ok(FetchOutcome { action, vcs: vcs.kind(), revision })
    }

    fn find_vcs(&self, name: &str) -> FetchResult<&Vcs> {
        VcsKind::from_name(name)
            .and_then(|kind| self.systems.iter().find(|vcs| vcs.kind() == kind))
            .ok_or_else(|| FetchError::UnrecognizedVcs { vcs: name.to_string() })
    }
}

/// Fetch with the real VCS tools.
pub fn fetch(uri_text: &str, local_path: &Path, config: &Config) -> FetchResult<FetchOutcome> {
    Fetcher::new(Arc::new(SystemExecutor), config).fetch(uri_text, local_path)
}

fn fetch_all_revisions(
    vcs: &Vcs,
    repo_uri: &str,
    local_path: &Path,
) -> FetchResult<(LocalRepository, FetchAction)> {
    match fs::metadata(local_path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(FetchError::InvalidTarget { path: local_path.to_path_buf() });
            }
            let repository = open_checkout_of(vcs, repo_uri, local_path)?;
            repository.update()?;
            Ok((repository, FetchAction::Updated))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Ok((vcs.clone_repository(repo_uri, local_path)?, FetchAction::Cloned))
        }
        Err(source) => Err(FetchError::Io {
            context: format!("failed to inspect {}", local_path.display()),
            source,
        }),
    }
}

/// Open `local_path`, refusing anything that is not a checkout of `repo_uri`.
fn open_checkout_of(
    vcs: &Vcs,
    repo_uri: &str,
    local_path: &Path,
) -> FetchResult<LocalRepository> {
    let vcs_directory = local_path.join(vcs.kind().directory_name());
    if !vcs_directory.is_dir() {
        return Err(FetchError::NotARepository { vcs_directory });
    }

    let repository = vcs.open_existing(local_path);
    let current = repository.current_remote_uri()?;
    if current != repo_uri {
        return Err(FetchError::RepositoryMismatch {
            path: local_path.to_path_buf(),
            current,
            expected: repo_uri.to_string(),
        });
    }
    Ok(repository)
}
