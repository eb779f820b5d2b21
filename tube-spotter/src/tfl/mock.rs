//! File-backed status source for running without an app key.
//!
//! Serves a saved `Line/Mode/{modes}/Status` response as if it were live.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::TflError;
use super::types::LineStatusRecord;

/// Status source that reads a saved feed response from disk.
#[derive(Debug, Clone)]
pub struct MockStatusClient {
    path: PathBuf,
    records: Arc<RwLock<Vec<LineStatusRecord>>>,
}

impl MockStatusClient {
    /// Load the saved response at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TflError> {
        let path = path.as_ref().to_path_buf();
        let records = read_records(&path)?;

        Ok(Self {
            path,
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Build a source directly from records.
    pub fn from_records(records: Vec<LineStatusRecord>) -> Self {
        Self {
            path: PathBuf::new(),
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Return the loaded records.
    pub async fn fetch_line_statuses(&self) -> Result<Vec<LineStatusRecord>, TflError> {
        Ok(self.records.read().await.clone())
    }

    /// Re-read the file this source was created from.
    pub async fn reload(&self) -> Result<usize, TflError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| read_error(&self.path, e))?;
        let records = parse_records(&self.path, &json)?;
        let count = records.len();
        *self.records.write().await = records;
        Ok(count)
    }

    /// Replace the served records.
    pub async fn set_records(&self, records: Vec<LineStatusRecord>) {
        *self.records.write().await = records;
    }
}

fn read_records(path: &Path) -> Result<Vec<LineStatusRecord>, TflError> {
    let json = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    parse_records(path, &json)
}

fn read_error(path: &Path, e: std::io::Error) -> TflError {
    TflError::File {
        message: format!("failed to read {}: {}", path.display(), e),
    }
}

fn parse_records(path: &Path, json: &str) -> Result<Vec<LineStatusRecord>, TflError> {
    serde_json::from_str(json).map_err(|e| TflError::Json {
        message: format!("failed to parse {}: {}", path.display(), e),
        body: None,
    })
}
