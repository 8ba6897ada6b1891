//! Mercurial adapter

use super::Vcs;
use crate::error::FetchResult;
use std::ffi::OsStr;
use std::path::Path;

pub(super) fn clone(vcs: &Vcs, repo_uri: &str, local_path: &Path) -> FetchResult<()> {
    vcs.check_call(&[OsStr::new("clone"), OsStr::new(repo_uri), local_path.as_os_str()], None)
}

pub(super) fn update(vcs: &Vcs, working_directory: &Path) -> FetchResult<()> {
    vcs.check_call(&[OsStr::new("pull")], Some(working_directory))
}

pub(super) fn checkout_revision(
    vcs: &Vcs,
    working_directory: &Path,
    revision: &str,
) -> FetchResult<()> {
    vcs.check_call(&[OsStr::new("update"), OsStr::new(revision)], Some(working_directory))
}

/// Mercurial reports local remotes as bare paths; put the `file://` scheme
/// back so the value compares equal to the URI that was cloned.
pub(super) fn remote_uri(vcs: &Vcs, working_directory: &Path) -> FetchResult<String> {
    let output = vcs.check_output(
        &[OsStr::new("showconfig"), OsStr::new("paths.default")],
        Some(working_directory),
    )?;
    let uri = output.trim();
    if uri.contains("://") {
        Ok(uri.to_string())
    } else {
        Ok(format!("file://{uri}"))
    }
}
