//! Working-copy detection for `what-is-this`

use super::VcsKind;
use std::path::{Path, PathBuf};

/// A working copy found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedRepository {
    pub kind: VcsKind,
    pub working_directory: PathBuf,
}

impl DetectedRepository {
    /// Repository URI that `fetch` accepts for this working copy.
    pub fn uri(&self) -> String {
        format!("{}+file://{}", self.kind.name(), self.working_directory.display())
    }
}

/// Walk up from `start` to the nearest directory holding a `.git` or `.hg`
/// entry. Git wins when one directory holds both.
pub fn find_repository(start: &Path) -> Option<DetectedRepository> {
    let mut current = start;
    loop {
        if let Some(kind) =
            VcsKind::ALL.into_iter().find(|kind| current.join(kind.directory_name()).exists())
        {
            return Some(DetectedRepository { kind, working_directory: current.to_path_buf() });
        }
        current = current.parent()?;
    }
}
