//! Scripted [`Executor`] for exercising adapters without real VCS tools.

use super::process::{ExecutionResult, Executor, ProcessError};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command_line: String,
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct Response {
    exit_code: i32,
    stdout: String,
}

/// Records every invocation. Unscripted commands succeed with empty output.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<HashMap<String, Response>>,
    missing: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result of an exact command line such as `"git config remote.origin.url"`.
    pub fn respond(&self, command_line: &str, exit_code: i32, stdout: &str) {
        self.responses
            .lock()
            .expect("responses lock")
            .insert(command_line.to_string(), Response { exit_code, stdout: stdout.to_string() });
    }

    /// Pretend `program` is not installed.
    pub fn missing(&self, program: &str) {
        self.missing.lock().expect("missing lock").push(program.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command_line).collect()
    }
}

impl Executor for FakeExecutor {
    fn run(
        &self,
        program: &str,
        args: &[&OsStr],
        cwd: Option<&Path>,
    ) -> Result<ExecutionResult, ProcessError> {
        let command_line = std::iter::once(program.to_string())
            .chain(args.iter().map(|arg| arg.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ");
        self.calls
            .lock()
            .expect("calls lock")
            .push(Call { command_line: command_line.clone(), cwd: cwd.map(Path::to_path_buf) });

        if self.missing.lock().expect("missing lock").iter().any(|p| p == program) {
            return Err(ProcessError::NotFound { program: program.to_string() });
        }

        let response = self.responses.lock().expect("responses lock").get(&command_line).cloned();
        Ok(match response {
            Some(Response { exit_code, stdout }) => {
                ExecutionResult { exit_code: Some(exit_code), stdout }
            }
            None => ExecutionResult { exit_code: Some(0), stdout: String::new() },
        })
    }
}
