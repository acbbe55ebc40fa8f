use thiserror::Error;

/// Unified error type for release-lines operations
#[derive(Error, Debug)]
pub enum ReleaseLinesError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results in release-lines
pub type Result<T> = std::result::Result<T, ReleaseLinesError>;

impl ReleaseLinesError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseLinesError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseLinesError::Tag(msg.into())
    }

    /// Create an input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        ReleaseLinesError::Input(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseLinesError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleaseLinesError::Remote(msg.into())
    }
}
