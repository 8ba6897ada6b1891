//! Git adapter

use super::Vcs;
use crate::error::FetchResult;
use std::ffi::OsStr;
use std::path::Path;

pub(super) fn clone(vcs: &Vcs, repo_uri: &str, local_path: &Path) -> FetchResult<()> {
    vcs.check_call(&[OsStr::new("clone"), OsStr::new(repo_uri), local_path.as_os_str()], None)
}

pub(super) fn update(vcs: &Vcs, working_directory: &Path) -> FetchResult<()> {
    vcs.check_call(&[OsStr::new("fetch")], Some(working_directory))
}

/// Check out `revision`, preferring the remote-tracking `origin/<revision>`
/// when it exists, since a local branch of the same name may lag behind it.
pub(super) fn checkout_revision(
    vcs: &Vcs,
    working_directory: &Path,
    revision: &str,
) -> FetchResult<()> {
    let remote_revision = format!("origin/{revision}");
    let has_remote = vcs.call(
        &[
            OsStr::new("branch"),
            OsStr::new("-r"),
            OsStr::new("--contains"),
            OsStr::new(&remote_revision),
        ],
        Some(working_directory),
    )?;
    let target = if has_remote { remote_revision.as_str() } else { revision };
    vcs.check_call(&[OsStr::new("checkout"), OsStr::new(target)], Some(working_directory))
}

pub(super) fn remote_uri(vcs: &Vcs, working_directory: &Path) -> FetchResult<String> {
    let output = vcs.check_output(
        &[OsStr::new("config"), OsStr::new("remote.origin.url")],
        Some(working_directory),
    )?;
    Ok(output.trim().to_string())
}
