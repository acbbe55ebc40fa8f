use crate::analyzer::TieBreak;
use crate::domain::TagMatcher;
use crate::error::{ReleaseLinesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "release-lines.toml";

/// Represents the complete configuration for release-lines.
///
/// Contains the GitHub client settings, tag naming patterns, and selection options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub selection: SelectionConfig,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    10
}

fn default_max_pages() -> u32 {
    1
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Settings for the GitHub releases API client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Name of the environment variable holding an API token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: default_api_url(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_tag_patterns() -> Vec<String> {
    vec!["v{version}".to_string(), "{version}".to_string()]
}

/// Tag naming patterns tried in order when parsing release tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_patterns")]
    pub patterns: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            patterns: default_tag_patterns(),
        }
    }
}

impl TagsConfig {
    /// Compile the configured patterns
    pub fn matcher(&self) -> Result<TagMatcher> {
        TagMatcher::from_patterns(&self.patterns)
    }
}

/// Options for choosing one version per release line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SelectionConfig {
    #[serde(default)]
    pub tie_break: TieBreak,

    #[serde(default)]
    pub skip_invalid_tags: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-lines.toml` in current directory
/// 3. `release-lines.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        ReleaseLinesError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str).map_err(|e| {
        ReleaseLinesError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })?;
    tracing::debug!(file = %path.display(), "loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 10);
        assert_eq!(config.github.max_pages, 1);
        assert_eq!(config.selection.tie_break, TieBreak::FirstSeen);
        assert!(!config.selection.skip_invalid_tags);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[github]\nper_page = 50\n").unwrap();
        assert_eq!(config.github.per_page, 50);
        assert_eq!(config.github.token_env, "GITHUB_TOKEN");
        assert_eq!(config.tags, TagsConfig::default());
    }

    #[test]
    fn test_tie_break_kebab_case() {
        let config: Config =
            toml::from_str("[selection]\ntie_break = \"highest-precedence\"\n").unwrap();
        assert_eq!(config.selection.tie_break, TieBreak::HighestPrecedence);
    }

    #[test]
    fn test_default_tag_patterns_compile() {
        let matcher = TagsConfig::default().matcher().unwrap();
        assert_eq!(matcher.patterns().len(), 2);
    }
}
