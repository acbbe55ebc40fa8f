use crate::config::GithubConfig;
use crate::domain::RepoId;
use crate::error::{ReleaseLinesError, Result};
use crate::source::ReleaseSource;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;
use std::time::Duration;

/// One entry of the `GET /repos/{owner}/{repo}/releases` response
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReleaseEntry {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
}

/// Release source backed by the GitHub REST API
pub struct GithubSource {
    client: Client,
    api_url: String,
    per_page: u32,
    max_pages: u32,
}

impl GithubSource {
    /// Build a source with its own HTTP client
    pub fn new(
        api_url: impl Into<String>,
        per_page: u32,
        max_pages: u32,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ReleaseLinesError::config("API token contains invalid characters"))?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(format!("release-lines/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(GithubSource {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            per_page: per_page.max(1),
            max_pages: max_pages.max(1),
        })
    }

    /// Build a source from configuration, reading the token from the
    /// environment variable the configuration names
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        let token = resolve_token(&config.token_env);
        if token.is_none() {
            tracing::debug!(env = %config.token_env, "no API token set, using anonymous requests");
        }
        Self::new(
            config.api_url.clone(),
            config.per_page,
            config.max_pages,
            token,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// URL of one page of a repository's release list
    pub fn releases_url(&self, repo: &RepoId, page: u32) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={}&page={}",
            self.api_url, repo.owner, repo.name, self.per_page, page
        )
    }

    fn fetch_page(&self, repo: &RepoId, page: u32) -> Result<Vec<ReleaseEntry>> {
        let url = self.releases_url(repo, page);
        tracing::debug!(%url, "fetching releases");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ReleaseLinesError::remote(format!(
                "Failed to list releases: {} ({})",
                url, status
            )));
        }

        parse_release_page(&resp.text()?)
    }
}

impl ReleaseSource for GithubSource {
    fn list_release_tags(&self, repo: &RepoId) -> Result<Vec<String>> {
        let mut tags = Vec::new();

        for page in 1..=self.max_pages {
            let entries = self.fetch_page(repo, page)?;
            let count = entries.len();
            tags.extend(
                entries
                    .into_iter()
                    .filter(|entry| !entry.draft)
                    .map(|entry| entry.tag_name),
            );
            if count < self.per_page as usize {
                break;
            }
        }

        tracing::debug!(repo = %repo, count = tags.len(), "listed release tags");
        Ok(tags)
    }
}

/// Decode a releases response body
pub fn parse_release_page(body: &str) -> Result<Vec<ReleaseEntry>> {
    serde_json::from_str(body)
        .map_err(|e| ReleaseLinesError::remote(format!("Unexpected releases response: {}", e)))
}

/// Read an API token from `env_var`, ignoring empty values
pub fn resolve_token(env_var: &str) -> Option<String> {
    std::env::var(env_var)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
