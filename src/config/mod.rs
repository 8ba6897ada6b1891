//! Configuration loading and merging
//!
//! Settings come from a config file, `BLAH_*` environment variables and CLI
//! flags, with precedence CLI > Env > File > Defaults.

use crate::vcs::VcsKind;
use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::{load_config, CliOverrides};

/// Which executables implement each VCS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub git_command: String,
    pub hg_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { git_command: "git".to_string(), hg_command: "hg".to_string() }
    }
}

impl Config {
    pub fn program_for(&self, kind: VcsKind) -> &str {
        match kind {
            VcsKind::Git => &self.git_command,
            VcsKind::Hg => &self.hg_command,
        }
    }
}
