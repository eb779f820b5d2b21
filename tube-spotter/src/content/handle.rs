//! Shared, refreshable catalog.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::CachedStatusClient;
use crate::catalog::{Catalog, StatusFeed};

use super::error::LoadError;
use super::loader::{ContentPaths, RetryPolicy, load_with_retry};

/// Thread-safe handle to the current catalog.
///
/// Readers take a snapshot with [`CatalogHandle::current`] and keep using
/// it for as long as they like; refreshes swap in a new catalog without
/// touching snapshots already handed out.
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Arc<Catalog>>>,
    statuses: CachedStatusClient,
}

impl CatalogHandle {
    /// Load content, retrying per `policy`.
    pub async fn load(
        paths: &ContentPaths,
        statuses: CachedStatusClient,
        policy: RetryPolicy,
    ) -> Result<Self, LoadError> {
        let catalog = load_with_retry(paths, &statuses, policy).await?;
        Ok(Self::new(catalog, statuses))
    }

    /// Wrap an already built catalog.
    pub fn new(catalog: Catalog, statuses: CachedStatusClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
            statuses,
        }
    }

    /// Snapshot of the current catalog.
    pub async fn current(&self) -> Arc<Catalog> {
        Arc::clone(&*self.inner.read().await)
    }

    /// Re-fetch line statuses (through the cache) and swap them in.
    ///
    /// On failure the existing catalog is kept and the error returned.
    pub async fn refresh_statuses(&self) -> Result<usize, LoadError> {
        let feed = self.statuses.fetch_line_statuses().await?;
        let statuses = StatusFeed::new(feed.to_vec(), Utc::now());
        let count = statuses.len();

        let mut guard = self.inner.write().await;
        let refreshed = guard.with_statuses(statuses);
        *guard = Arc::new(refreshed);

        info!(statuses = count, "line statuses refreshed");
        Ok(count)
    }

    /// Drop cached statuses and refresh from the source.
    pub async fn force_refresh_statuses(&self) -> Result<usize, LoadError> {
        self.statuses.invalidate();
        self.refresh_statuses().await
    }
}
