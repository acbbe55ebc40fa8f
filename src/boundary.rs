use std::fmt;

/// Warnings raised while turning a repository's releases into a report.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag {
        repo: String,
        tag: String,
        reason: String,
    },
    /// The repository has no releases at all
    NoReleases { repo: String },
    /// Releases exist but every one is below the minimum version
    NothingAboveFloor {
        repo: String,
        min_version: String,
        newest: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { repo, tag, reason } => {
                write!(f, "Cannot parse tag '{}' of {}: {}", tag, repo, reason)
            }
            BoundaryWarning::NoReleases { repo } => {
                write!(f, "No releases found for {}", repo)
            }
            BoundaryWarning::NothingAboveFloor {
                repo,
                min_version,
                newest,
            } => {
                write!(
                    f,
                    "No release of {} reaches minimum version {} (newest: {})",
                    repo, min_version, newest
                )
            }
        }
    }
}
