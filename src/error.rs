//! Error kinds raised while fetching a working copy

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a fetch.
///
/// Each variant is raised where the condition is detected and handed to the
/// caller of [`crate::fetch::fetch`] unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid repository URI '{uri}' (expected <vcs>+<uri>[#<revision>])")]
    InvalidUri { uri: String },

    #[error("source control system not recognised: {vcs}")]
    UnrecognizedVcs { vcs: String },

    #[error("{}", not_found_message(.command))]
    ExecutableNotFound { command: String },

    #[error("command failed ({}): {command}", describe_exit(.exit_code))]
    VcsCommand { command: String, exit_code: Option<i32> },

    #[error("checkout path already exists, and is not a directory: {}", .path.display())]
    InvalidTarget { path: PathBuf },

    #[error("VCS directory doesn't exist: {}", .vcs_directory.display())]
    NotARepository { vcs_directory: PathBuf },

    #[error(
        "checkout directory {} is a checkout of a different URI: {current} (expected: {expected})",
        .path.display()
    )]
    RepositoryMismatch { path: PathBuf, current: String, expected: String },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type FetchResult<T> = Result<T, FetchError>;

/// A program given as a path is reported as missing outright; a bare name was
/// looked up on `$PATH`, so point the user there.
fn not_found_message(command: &str) -> String {
    if command.contains(std::path::MAIN_SEPARATOR) || command.contains('/') {
        format!("No such command: {command}")
    } else {
        format!("Command not found: {command}. Check that {command} is installed and on $PATH")
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
