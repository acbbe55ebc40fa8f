use crate::domain::RepoId;
use crate::error::{ReleaseLinesError, Result};
use crate::source::ReleaseSource;
use std::collections::HashMap;

/// Mock release source for testing without network or git access
pub struct MockSource {
    releases: HashMap<RepoId, Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockSource {
            releases: HashMap::new(),
        }
    }

    /// Register the release tags of a repository, replacing earlier ones
    pub fn add_releases<I, S>(&mut self, repo: RepoId, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.releases
            .insert(repo, tags.into_iter().map(Into::into).collect());
    }

    /// Builder form of [`MockSource::add_releases`]
    pub fn with_releases<I, S>(mut self, repo: RepoId, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_releases(repo, tags);
        self
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseSource for MockSource {
    fn list_release_tags(&self, repo: &RepoId) -> Result<Vec<String>> {
        self.releases
            .get(repo)
            .cloned()
            .ok_or_else(|| ReleaseLinesError::remote(format!("Repository not found: {}", repo)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_returns_tags_in_order() {
        let repo = RepoId::new("acme", "widget");
        let source = MockSource::new().with_releases(repo.clone(), ["v1.1.0", "v1.0.0"]);
        assert_eq!(source.list_release_tags(&repo).unwrap(), ["v1.1.0", "v1.0.0"]);
    }

    #[test]
    fn test_mock_source_unknown_repo() {
        let source = MockSource::default();
        let err = source
            .list_release_tags(&RepoId::new("acme", "widget"))
            .unwrap_err();
        assert!(err.to_string().contains("acme/widget"));
    }

    #[test]
    fn test_mock_source_replaces_releases() {
        let repo = RepoId::new("acme", "widget");
        let mut source = MockSource::new();
        source.add_releases(repo.clone(), ["v1.0.0"]);
        source.add_releases(repo.clone(), Vec::<String>::new());
        assert!(source.list_release_tags(&repo).unwrap().is_empty());
    }
}
