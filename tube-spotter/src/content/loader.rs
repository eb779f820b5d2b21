//! Reads the bundled content files and assembles a catalog.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::cache::CachedStatusClient;
use crate::catalog::{AssociationRecord, Catalog, StationRecord};

use super::error::LoadError;

/// Locations of the station and association files.
#[derive(Debug, Clone)]
pub struct ContentPaths {
    pub stations: PathBuf,
    pub associations: PathBuf,
}

impl ContentPaths {
    pub fn new(stations: impl Into<PathBuf>, associations: impl Into<PathBuf>) -> Self {
        Self {
            stations: stations.into(),
            associations: associations.into(),
        }
    }
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self::new("data/stations.json", "data/station_lines.json")
    }
}

/// How often and how patiently to retry a failed load.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A single attempt.
    pub fn none() -> Self {
        Self {
            attempts: 1,
            delay: Duration::ZERO,
        }
    }
}

/// Read a JSON array of records from `path`.
pub async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read both content files and fetch the status feed, then build a catalog.
///
/// The three reads run concurrently; the first failure wins.
pub async fn load_catalog(
    paths: &ContentPaths,
    statuses: &CachedStatusClient,
) -> Result<Catalog, LoadError> {
    let (stations, associations, feed) = futures::try_join!(
        read_records::<StationRecord>(&paths.stations),
        read_records::<AssociationRecord>(&paths.associations),
        async { statuses.fetch_line_statuses().await.map_err(LoadError::from) },
    )?;

    let catalog = Catalog::load(stations, associations, feed.to_vec())?;

    info!(
        stations = catalog.stations().len(),
        associations = catalog.associations().len(),
        statuses = catalog.statuses().len(),
        "content loaded"
    );

    Ok(catalog)
}

/// [`load_catalog`], repeated on retryable failures.
pub async fn load_with_retry(
    paths: &ContentPaths,
    statuses: &CachedStatusClient,
    policy: RetryPolicy,
) -> Result<Catalog, LoadError> {
    let mut attempt = 1;
    loop {
        match load_catalog(paths, statuses).await {
            Ok(catalog) => return Ok(catalog),
            Err(e) if e.is_retryable() && attempt < policy.attempts => {
                warn!(attempt, error = %e, "content load failed, retrying");
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
