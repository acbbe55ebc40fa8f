//! Release tag sources
//!
//! This module provides a trait-based abstraction over the places release
//! tags are listed from, so the workflow can be driven by a real service or
//! by an in-memory fake.
//!
//! # Overview
//!
//! The primary abstraction is the [ReleaseSource] trait. The concrete
//! implementations include:
//!
//! - [github::GithubSource]: GitHub REST API releases
//! - [git::LocalGitSource]: tags of local clones, read with the `git2` crate
//! - [mock::MockSource]: an in-memory implementation for testing
//!
//! # Usage
//!
//! Workflow code depends on the [ReleaseSource] trait and receives a
//! constructed source from its caller.
//!
//! ```rust
//! # use release_lines::source::ReleaseSource;
//! # use release_lines::domain::RepoId;
//! # fn example<S: ReleaseSource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = source.list_release_tags(&RepoId::new("kubernetes", "kubernetes"))?;
//! for tag in tags {
//!     println!("{}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod git;
pub mod github;
pub mod mock;

pub use git::LocalGitSource;
pub use github::GithubSource;
pub use mock::MockSource;

use crate::domain::RepoId;
use crate::error::Result;

/// Lists the release tags of a repository
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so one source can serve several
/// callers.
///
/// ## Error Handling
///
/// Implementations map their underlying failures (HTTP, `git2`) to the
/// matching [crate::error::ReleaseLinesError] variants.
pub trait ReleaseSource: Send + Sync {
    /// Return the raw tag names of every release of `repo`
    ///
    /// Tags are returned unparsed and in the order the source lists them.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, possibly empty
    /// * `Err` - If the repository cannot be reached or does not exist
    fn list_release_tags(&self, repo: &RepoId) -> Result<Vec<String>>;
}
