//! TfL Unified API client for line statuses.

use tracing::debug;

use crate::domain::Mode;

use super::error::TflError;
use super::types::LineStatusRecord;

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application key, sent as the `app_key` query parameter when set
    pub app_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Modes to request statuses for
    pub modes: Vec<Mode>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config for all modes with the given app key.
    pub fn new(app_key: Option<String>) -> Self {
        Self {
            app_key: app_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            modes: Mode::ALL.to_vec(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Restrict the modes requested.
    pub fn with_modes(mut self, modes: Vec<Mode>) -> Self {
        self.modes = modes;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The `{modes}` path segment, e.g. `tube,overground,dlr,national-rail`.
    pub fn modes_param(&self) -> String {
        self.modes
            .iter()
            .map(|m| m.feed_name())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn status_url(&self) -> String {
        format!(
            "{}/Line/Mode/{}/Status",
            self.base_url.trim_end_matches('/'),
            self.modes_param()
        )
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Client for the TfL line status endpoint.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    config: TflConfig,
}

impl TflClient {
    /// Create a new TfL client.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TflConfig {
        &self.config
    }

    /// Fetch the combined status list across the configured modes.
    pub async fn fetch_line_statuses(&self) -> Result<Vec<LineStatusRecord>, TflError> {
        let url = self.config.status_url();
        debug!(%url, "fetching line statuses");

        let mut request = self.http.get(&url);
        if let Some(key) = &self.config.app_key {
            request = request.query(&[("app_key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TflError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
