//! Running external VCS tools

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Exit status and captured standard output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be spawned because it does not exist.
    #[error("executable not found: {program}")]
    NotFound { program: String },

    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Capability to run an external program to completion.
///
/// Standard error is discarded. Implementations must report a missing
/// executable as [`ProcessError::NotFound`], never as a failed exit.
pub trait Executor {
    fn run(
        &self,
        program: &str,
        args: &[&OsStr],
        cwd: Option<&Path>,
    ) -> Result<ExecutionResult, ProcessError>;
}

/// Runs programs with [`std::process::Command`], blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(
        &self,
        program: &str,
        args: &[&OsStr],
        cwd: Option<&Path>,
    ) -> Result<ExecutionResult, ProcessError> {
        tracing::debug!(program, ?args, cwd = ?cwd, "running command");

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::null());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ProcessError::NotFound { program: program.to_string() }
            } else {
                ProcessError::Spawn { program: program.to_string(), source }
            }
        })?;

        let result = ExecutionResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        };
        tracing::debug!(program, exit_code = ?result.exit_code, "command finished");
        Ok(result)
    }
}
