use crate::domain::version::Version;
use crate::error::{ReleaseLinesError, Result};
use std::fmt;
use std::str::FromStr;

/// Repository identifier in `owner/repo` form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/repo`; both parts must be non-empty and there must be
    /// exactly one separator
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed.split_once('/') {
            Some((owner, name))
                if !owner.trim().is_empty() && !name.trim().is_empty() && !name.contains('/') =>
            {
                Ok(RepoId::new(owner.trim(), name.trim()))
            }
            _ => Err(ReleaseLinesError::input(format!(
                "Invalid repository '{}' - expected owner/repo",
                trimmed
            ))),
        }
    }
}

impl FromStr for RepoId {
    type Err = ReleaseLinesError;

    fn from_str(s: &str) -> Result<Self> {
        RepoId::parse(s)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One row of the input file: a repository and the minimum version to report
#[derive(Debug, Clone, PartialEq)]
pub struct RepoRequest {
    pub repo: RepoId,
    pub min_version: Version,
}

impl RepoRequest {
    pub fn new(repo: RepoId, min_version: Version) -> Self {
        RepoRequest { repo, min_version }
    }
}
