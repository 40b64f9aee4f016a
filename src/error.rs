use thiserror::Error;

/// Error types that can occur while generating a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid request parameters or format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Errors returned by the chat-completion provider
    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl From<reqwest::Error> for StoryError {
    fn from(err: reqwest::Error) -> Self {
        StoryError::HttpError(err.to_string())
    }
}
