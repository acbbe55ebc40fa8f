use crate::domain::version::Version;
use crate::error::{ReleaseLinesError, Result};
use regex::Regex;

/// Capture group substituted for `{version}` in a tag pattern
const VERSION_CAPTURE: &str =
    r"(?P<version>\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern
    ///
    /// The pattern must contain the `{version}` placeholder; every other
    /// character is matched literally.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains("{version}") {
            return Err(ReleaseLinesError::tag(format!(
                "Pattern '{}' must contain {{version}} placeholder",
                pattern
            )));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replacen(r"\{version\}", VERSION_CAPTURE, 1);
        let regex = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| ReleaseLinesError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, regex })
    }

    /// Extract the version text from a tag matching this pattern
    pub fn extract<'t>(&self, tag: &'t str) -> Option<&'t str> {
        self.regex
            .captures(tag)
            .and_then(|caps| caps.name("version"))
            .map(|m| m.as_str())
    }
}

/// Ordered set of tag patterns; the first matching pattern wins
#[derive(Debug, Clone)]
pub struct TagMatcher {
    patterns: Vec<TagPattern>,
}

impl TagMatcher {
    pub fn new(patterns: Vec<TagPattern>) -> Self {
        TagMatcher { patterns }
    }

    /// Compile a matcher from raw pattern strings
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let compiled = patterns
            .iter()
            .map(|p| TagPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if compiled.is_empty() {
            return Err(ReleaseLinesError::tag("At least one tag pattern is required"));
        }
        Ok(TagMatcher::new(compiled))
    }

    pub fn patterns(&self) -> &[TagPattern] {
        &self.patterns
    }

    /// Parse a release tag into a version using the first matching pattern
    pub fn parse_tag(&self, tag: &str) -> Result<Version> {
        let trimmed = tag.trim();
        let version_text = self
            .patterns
            .iter()
            .find_map(|p| p.extract(trimmed))
            .ok_or_else(|| {
                ReleaseLinesError::version(format!(
                    "Tag '{}' does not match any of the configured patterns",
                    trimmed
                ))
            })?;
        Version::parse(version_text)
    }
}

impl Default for TagMatcher {
    /// Accepts `v1.2.3` and `1.2.3`
    fn default() -> Self {
        let patterns = ["v{version}", "{version}"]
            .iter()
            .filter_map(|p| TagPattern::new(*p).ok())
            .collect();
        TagMatcher::new(patterns)
    }
}
