//! Caching layer for the line status feed.
//!
//! Every location update that places markers needs statuses, but the feed
//! only changes every few minutes. Responses are cached per request (the
//! requested mode list) for a short TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::tfl::{LineStatusRecord, StatusSource, TflError};

/// Cached feed response.
type FeedEntry = Arc<Vec<LineStatusRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 16,
        }
    }
}

/// Status source with caching.
#[derive(Clone)]
pub struct CachedStatusClient {
    source: StatusSource,
    feeds: MokaCache<String, FeedEntry>,
}

impl CachedStatusClient {
    /// Create a new cached client.
    pub fn new(source: StatusSource, config: &CacheConfig) -> Self {
        let feeds = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, feeds }
    }

    /// Get line statuses, using the cache if available.
    pub async fn fetch_line_statuses(&self) -> Result<FeedEntry, TflError> {
        let key = self.source.cache_key();

        if let Some(cached) = self.feeds.get(&key).await {
            debug!(%key, "status feed cache hit");
            return Ok(cached);
        }

        let records = self.source.fetch_line_statuses().await?;
        let entry = Arc::new(records);
        self.feeds.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Invalidate all cached entries.
    pub fn invalidate(&self) {
        self.feeds.invalidate_all();
    }
}
