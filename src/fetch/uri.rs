//! `<vcs>+<uri>[#<revision>]` repository URIs

use crate::error::{FetchError, FetchResult};
use std::fmt;
use std::str::FromStr;

/// A parsed repository URI.
///
/// `repo_uri` is handed to the VCS tool verbatim. The last `#` always
/// separates the revision, so a URI whose own text contains `#` cannot be
/// expressed without also naming a revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUri {
    pub vcs: String,
    pub repo_uri: String,
    pub revision: Option<String>,
}

pub fn parse(text: &str) -> FetchResult<RepositoryUri> {
    let invalid = || FetchError::InvalidUri { uri: text.to_string() };

    let (vcs, rest) = text.split_once('+').ok_or_else(invalid)?;
    if vcs.is_empty() {
        return Err(invalid());
    }

    let (repo_uri, revision) = match rest.rsplit_once('#') {
        Some((repo_uri, revision)) => (repo_uri, Some(revision.to_string())),
        None => (rest, None),
    };

    Ok(RepositoryUri { vcs: vcs.to_string(), repo_uri: repo_uri.to_string(), revision })
}

impl FromStr for RepositoryUri {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for RepositoryUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.vcs, self.repo_uri)?;
        if let Some(revision) = &self.revision {
            write!(f, "#{revision}")?;
        }
        Ok(())
    }
}
