//! TfL line status feed.
//!
//! The feed is a single combined list across modes, one record per line,
//! each carrying an ordered list of statuses. A line missing from the feed
//! is normal (many national-rail operators never appear).

mod client;
mod error;
mod mock;
mod types;

pub use client::{TflClient, TflConfig};
pub use error::TflError;
pub use mock::MockStatusClient;
pub use types::{LineStatus, LineStatusRecord};

/// Where line statuses come from.
#[derive(Debug, Clone)]
pub enum StatusSource {
    /// The live TfL API.
    Live(TflClient),
    /// A saved response on disk.
    Mock(MockStatusClient),
}

impl StatusSource {
    pub async fn fetch_line_statuses(&self) -> Result<Vec<LineStatusRecord>, TflError> {
        match self {
            StatusSource::Live(client) => client.fetch_line_statuses().await,
            StatusSource::Mock(client) => client.fetch_line_statuses().await,
        }
    }

    /// Key identifying the request, used for caching.
    pub fn cache_key(&self) -> String {
        match self {
            StatusSource::Live(client) => client.config().modes_param(),
            StatusSource::Mock(_) => "mock".to_string(),
        }
    }
}
