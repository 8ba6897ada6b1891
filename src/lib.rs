//! blah: fetch Git and Mercurial working copies
//!
//! A repository is named by a single URI of the form
//! `<vcs>+<uri>[#<revision>]`. Fetching clones into a missing path or updates
//! an existing checkout of the same remote, then checks out the revision
//! (or the system's default branch).

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod utils;
pub mod vcs;

pub use error::{FetchError, FetchResult};
pub use fetch::{fetch, FetchAction, FetchOutcome, Fetcher, RepositoryUri};
