//! Domain logic - pure version rules independent of where releases come from

pub mod line;
pub mod repo;
pub mod tag;
pub mod version;

pub use line::ReleaseLine;
pub use repo::{RepoId, RepoRequest};
pub use tag::{TagMatcher, TagPattern};
pub use version::{compare_precedence, Version};
