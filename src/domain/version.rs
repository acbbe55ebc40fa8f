use crate::domain::line::ReleaseLine;
use crate::error::{ReleaseLinesError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version value
///
/// Wraps a parsed [`semver::Version`]. Ordering and equality follow semver
/// precedence through [`compare_precedence`], so build metadata never affects
/// either.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Create a release version without prerelease label or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// Parse a strict `major.minor.patch[-pre][+build]` string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        semver::Version::parse(trimmed)
            .map(|inner| Version { inner })
            .map_err(|e| {
                ReleaseLinesError::version(format!("Invalid version '{}': {}", trimmed, e))
            })
    }

    /// Parse version from a release tag (e.g., "v1.2.3" -> 1.2.3)
    ///
    /// Only a single leading lowercase `v` is stripped, the same prefix the
    /// default tag patterns accept.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        Self::parse(trimmed.strip_prefix('v').unwrap_or(trimmed))
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Prerelease label without the leading `-`, empty for releases
    pub fn prerelease(&self) -> &str {
        self.inner.pre.as_str()
    }

    /// Build metadata without the leading `+`, empty when absent
    pub fn build(&self) -> &str {
        self.inner.build.as_str()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.inner.pre.is_empty()
    }

    /// The major.minor line this version belongs to
    pub fn line(&self) -> ReleaseLine {
        ReleaseLine::new(self.major(), self.minor())
    }
}

/// Compare two versions by semver precedence.
///
/// Core triple first, then prerelease: a prerelease sorts before the plain
/// release, and two prerelease labels are compared identifier by identifier
/// (numeric identifiers numerically and below alphanumeric ones).
/// Build metadata is ignored.
pub fn compare_precedence(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| a.inner.pre.cmp(&b.inner.pre))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare_precedence(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_precedence(self, other)
    }
}

impl FromStr for Version {
    type Err = ReleaseLinesError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
