//! Scratch Git and Mercurial repositories for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// A repository with a single commit adding `README` = "Run it.".
pub struct TempRepo {
    dir: TempDir,
    program: &'static str,
}

impl TempRepo {
    pub fn git() -> Self {
        let repo = Self { dir: TempDir::new().expect("tmp"), program: "git" };
        repo.run(&["init", "--quiet"]);
        // Independent of init.defaultBranch so `origin/master` exists after cloning.
        repo.run(&["symbolic-ref", "HEAD", "refs/heads/master"]);
        repo.commit_readme("Run it.", "Adding README");
        repo
    }

    pub fn hg() -> Self {
        let repo = Self { dir: TempDir::new().expect("tmp"), program: "hg" };
        repo.run(&["init"]);
        repo.commit_readme("Run it.", "Adding README");
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `<vcs>+file://<path>` URI for this repository.
    pub fn uri(&self) -> String {
        format!("{}+file://{}", self.program, self.path().display())
    }

    pub fn commit_readme(&self, contents: &str, message: &str) {
        fs::write(self.path().join("README"), contents).expect("write README");
        self.run(&["add", "README"]);
        match self.program {
            "git" => self.run(&["-c", "commit.gpgsign=false", "commit", "--quiet", "-m", message]),
            _ => self.run(&["commit", "-u", "Test User <test@example.com>", "-m", message]),
        }
    }

    fn run(&self, args: &[&str]) {
        let status = Command::new(self.program)
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("HGPLAIN", "1")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .expect("spawn vcs");
        assert!(status.success(), "{} {:?} failed", self.program, args);
    }
}

pub fn read_readme(dir: &Path) -> String {
    fs::read_to_string(dir.join("README")).expect("read README")
}
