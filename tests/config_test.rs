// tests/config_test.rs
use release_lines::config::{load_config, Config};
use release_lines::{ReleaseLinesError, TieBreak};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.github.token_env, "GITHUB_TOKEN");
    assert_eq!(config.tags.patterns, vec!["v{version}", "{version}"]);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[github]
api_url = "https://github.example.com/api/v3"
per_page = 100
max_pages = 5

[tags]
patterns = ["release-{version}"]

[selection]
tie_break = "highest-precedence"
skip_invalid_tags = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(config.github.per_page, 100);
    assert_eq!(config.github.max_pages, 5);
    assert_eq!(config.github.timeout_secs, 30);
    assert_eq!(config.tags.patterns, vec!["release-{version}"]);
    assert_eq!(config.selection.tie_break, TieBreak::HighestPrecedence);
    assert!(config.selection.skip_invalid_tags);

    let matcher = config.tags.matcher().unwrap();
    assert!(matcher.parse_tag("release-1.2.3").is_ok());
    assert!(matcher.parse_tag("v1.2.3").is_err());
}

#[test]
fn test_empty_file_gives_defaults() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[github\nper_page = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, ReleaseLinesError::Config(_)));
}

#[test]
fn test_unknown_tie_break_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[selection]\ntie_break = \"newest\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let err = load_config(Some("/nonexistent/release-lines.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/release-lines.toml"));
}

#[test]
#[serial]
fn test_config_in_working_directory_is_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("release-lines.toml"),
        "[github]\nper_page = 42\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().github.per_page, 42);
}
