//! TfL client error types.

/// Errors that can occur when fetching the line status feed.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The app key was rejected
    #[error("unauthorized: check TFL_APP_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by TfL API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Local status file could not be read
    #[error("status file error: {message}")]
    File { message: String },
}

impl TflError {
    /// Whether repeating the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TflError::Http(_) | TflError::RateLimited => true,
            TflError::Api { status, .. } => *status >= 500,
            TflError::Unauthorized | TflError::Json { .. } | TflError::File { .. } => false,
        }
    }
}
