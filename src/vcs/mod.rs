//! Git and Mercurial adapters
//!
//! Both tools are driven through an injected [`Executor`]. A
//! [`LocalRepository`] is only a path plus the adapter that produced it;
//! every query goes back to the external tool.

use crate::error::{FetchError, FetchResult};
use crate::utils::{ExecutionResult, Executor, ProcessError};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod detect;
mod git;
mod hg;

/// Supported version-control systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    Git,
    Hg,
}

impl VcsKind {
    /// Registration order, also used when sniffing a directory.
    pub const ALL: [VcsKind; 2] = [VcsKind::Git, VcsKind::Hg];

    /// Scheme keyword used before the `+` in a repository URI.
    pub fn name(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Hg => "hg",
        }
    }

    /// Metadata directory inside a working copy.
    pub fn directory_name(self) -> &'static str {
        match self {
            VcsKind::Git => ".git",
            VcsKind::Hg => ".hg",
        }
    }

    /// Revision checked out when the URI names none.
    pub fn default_branch(self) -> &'static str {
        match self {
            VcsKind::Git => "origin/master",
            VcsKind::Hg => "default",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One VCS tool bound to the program that implements it.
#[derive(Clone)]
pub struct Vcs {
    kind: VcsKind,
    program: String,
    executor: Arc<dyn Executor>,
}

impl fmt::Debug for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vcs").field("kind", &self.kind).field("program", &self.program).finish()
    }
}

impl Vcs {
    pub fn new(kind: VcsKind, program: impl Into<String>, executor: Arc<dyn Executor>) -> Self {
        Self { kind, program: program.into(), executor }
    }

    pub fn kind(&self) -> VcsKind {
        self.kind
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Clone `repo_uri` into `local_path`, which the tool creates.
    pub fn clone_repository(
        &self,
        repo_uri: &str,
        local_path: &Path,
    ) -> FetchResult<LocalRepository> {
        tracing::info!(vcs = %self.kind, repo_uri, path = %local_path.display(), "cloning");
        match self.kind {
            VcsKind::Git => git::clone(self, repo_uri, local_path)?,
            VcsKind::Hg => hg::clone(self, repo_uri, local_path)?,
        }
        Ok(self.open_existing(local_path))
    }

    /// Bind to a working copy without checking that it is one.
    pub fn open_existing(&self, local_path: &Path) -> LocalRepository {
        LocalRepository { working_directory: local_path.to_path_buf(), vcs: self.clone() }
    }

    fn run(&self, args: &[&OsStr], cwd: Option<&Path>) -> FetchResult<ExecutionResult> {
        self.executor.run(&self.program, args, cwd).map_err(|err| match err {
            ProcessError::NotFound { program } => {
                FetchError::ExecutableNotFound { command: program }
            }
            ProcessError::Spawn { program, source } => {
                FetchError::Io { context: format!("failed to run {program}"), source }
            }
        })
    }

    /// Run and fail unless the command exits zero.
    fn check_call(&self, args: &[&OsStr], cwd: Option<&Path>) -> FetchResult<()> {
        self.check_output(args, cwd).map(|_| ())
    }

    /// Run and report whether the command exited zero.
    fn call(&self, args: &[&OsStr], cwd: Option<&Path>) -> FetchResult<bool> {
        Ok(self.run(args, cwd)?.success())
    }

    fn check_output(&self, args: &[&OsStr], cwd: Option<&Path>) -> FetchResult<String> {
        let result = self.run(args, cwd)?;
        if result.success() {
            Ok(result.stdout)
        } else {
            Err(FetchError::VcsCommand {
                command: self.command_line(args),
                exit_code: result.exit_code,
            })
        }
    }

    fn command_line(&self, args: &[&OsStr]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// A working copy on disk.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    working_directory: PathBuf,
    vcs: Vcs,
}

impl LocalRepository {
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn kind(&self) -> VcsKind {
        self.vcs.kind
    }

    /// URI of the remote this working copy was cloned from.
    pub fn current_remote_uri(&self) -> FetchResult<String> {
        match self.vcs.kind {
            VcsKind::Git => git::remote_uri(&self.vcs, &self.working_directory),
            VcsKind::Hg => hg::remote_uri(&self.vcs, &self.working_directory),
        }
    }

    /// Pull new history without moving the working copy.
    pub fn update(&self) -> FetchResult<()> {
        tracing::info!(vcs = %self.vcs.kind, path = %self.working_directory.display(), "updating");
        match self.vcs.kind {
            VcsKind::Git => git::update(&self.vcs, &self.working_directory),
            VcsKind::Hg => hg::update(&self.vcs, &self.working_directory),
        }
    }

    pub fn checkout_revision(&self, revision: &str) -> FetchResult<()> {
        tracing::debug!(vcs = %self.vcs.kind, revision, "checking out");
        match self.vcs.kind {
            VcsKind::Git => git::checkout_revision(&self.vcs, &self.working_directory, revision),
            VcsKind::Hg => hg::checkout_revision(&self.vcs, &self.working_directory, revision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fake_executor::FakeExecutor;

    #[test]
    fn descriptors_match_tools() {
        assert_eq!(VcsKind::Git.name(), "git");
        assert_eq!(VcsKind::Git.directory_name(), ".git");
        assert_eq!(VcsKind::Git.default_branch(), "origin/master");
        assert_eq!(VcsKind::Hg.name(), "hg");
        assert_eq!(VcsKind::Hg.directory_name(), ".hg");
        assert_eq!(VcsKind::Hg.default_branch(), "default");
    }

    #[test]
    fn kinds_are_found_by_scheme_name() {
        assert_eq!(VcsKind::from_name("git"), Some(VcsKind::Git));
        assert_eq!(VcsKind::from_name("hg"), Some(VcsKind::Hg));
        assert_eq!(VcsKind::from_name("svn"), None);
        assert_eq!(VcsKind::from_name("Git"), None);
    }

    #[test]
    fn open_existing_runs_nothing() {
        let fake = Arc::new(FakeExecutor::new());
        let vcs = Vcs::new(VcsKind::Git, "git", fake.clone());
        let repo = vcs.open_existing(Path::new("/srv/checkout"));
        assert_eq!(repo.working_directory(), Path::new("/srv/checkout"));
        assert_eq!(repo.kind(), VcsKind::Git);
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn configured_program_is_invoked() {
        let fake = Arc::new(FakeExecutor::new());
        let vcs = Vcs::new(VcsKind::Hg, "/opt/hg/bin/hg", fake.clone());
        assert_eq!(vcs.program(), "/opt/hg/bin/hg");
        vcs.open_existing(Path::new("/srv/checkout")).update().expect("update");
        assert_eq!(fake.command_lines(), vec!["/opt/hg/bin/hg pull"]);
    }

    #[test]
    fn missing_program_is_executable_not_found() {
        let fake = Arc::new(FakeExecutor::new());
        fake.missing("git");
        let vcs = Vcs::new(VcsKind::Git, "git", fake.clone());
        let err = vcs.clone_repository("file:///srv/repo", Path::new("/tmp/out")).unwrap_err();
        assert!(matches!(err, FetchError::ExecutableNotFound { ref command } if command == "git"));
    }

    #[test]
    fn non_zero_exit_is_vcs_command_error() {
        let fake = Arc::new(FakeExecutor::new());
        fake.respond("git fetch", 128, "");
        let vcs = Vcs::new(VcsKind::Git, "git", fake.clone());
        let err = vcs.open_existing(Path::new("/srv/checkout")).update().unwrap_err();
        match err {
            FetchError::VcsCommand { command, exit_code } => {
                assert_eq!(command, "git fetch");
                assert_eq!(exit_code, Some(128));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
