use crate::domain::RepoId;
use crate::error::{ReleaseLinesError, Result};
use crate::source::ReleaseSource;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Release source reading tags from local clones laid out as `<root>/<owner>/<repo>`
pub struct LocalGitSource {
    root: PathBuf,
}

impl LocalGitSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        LocalGitSource {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory expected to hold the clone of `repo`
    pub fn repo_path(&self, repo: &RepoId) -> PathBuf {
        self.root.join(&repo.owner).join(&repo.name)
    }
}

impl ReleaseSource for LocalGitSource {
    fn list_release_tags(&self, repo: &RepoId) -> Result<Vec<String>> {
        let path = self.repo_path(repo);
        let git_repo = Git2Repo::open(&path).map_err(|e| {
            ReleaseLinesError::Git(git2::Error::from_str(&format!(
                "Cannot open clone of {} at '{}': {}",
                repo,
                path.display(),
                e.message()
            )))
        })?;

        let tags = git_repo.tag_names(None)?;
        let tags: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();

        tracing::debug!(repo = %repo, count = tags.len(), "listed local tags");
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_clone_with_tags(root: &Path, repo: &RepoId, tags: &[&str]) {
        let path = root.join(&repo.owner).join(&repo.name);
        let git_repo = Git2Repo::init(&path).unwrap();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = git_repo.index().unwrap().write_tree().unwrap();
        let tree = git_repo.find_tree(tree_id).unwrap();
        let oid = git_repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let object = git_repo.find_object(oid, None).unwrap();
        for tag in tags {
            git_repo.tag_lightweight(tag, &object, false).unwrap();
        }
    }

    #[test]
    fn test_lists_tags_of_local_clone() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RepoId::new("acme", "widget");
        init_clone_with_tags(dir.path(), &repo, &["v1.0.0", "v1.1.0", "v1.0.1"]);

        let source = LocalGitSource::new(dir.path());
        let mut tags = source.list_release_tags(&repo).unwrap();
        tags.sort();
        assert_eq!(tags, ["v1.0.0", "v1.0.1", "v1.1.0"]);
    }

    #[test]
    fn test_missing_clone_is_git_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalGitSource::new(dir.path());
        let err = source
            .list_release_tags(&RepoId::new("acme", "missing"))
            .unwrap_err();
        assert!(matches!(err, ReleaseLinesError::Git(_)));
        assert!(err.to_string().contains("acme/missing"));
    }

    #[test]
    fn test_repo_path_layout() {
        let source = LocalGitSource::new("/srv/mirrors");
        assert_eq!(
            source.repo_path(&RepoId::new("acme", "widget")),
            PathBuf::from("/srv/mirrors/acme/widget")
        );
    }
}
