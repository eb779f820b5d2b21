//! Content loading errors.

use std::path::PathBuf;

use crate::catalog::CatalogError;
use crate::tfl::TflError;

/// Errors that stop the catalog from being assembled.
///
/// Any of these aborts startup; the caller decides whether to retry the
/// whole load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A content file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file is not valid JSON for its record type
    #[error("failed to parse {}: {message}", path.display())]
    Json { path: PathBuf, message: String },

    /// The status feed could not be fetched
    #[error("status feed unavailable: {0}")]
    Feed(#[from] TflError),

    /// Records were read but failed validation
    #[error("invalid content: {0}")]
    Catalog(#[from] CatalogError),
}

impl LoadError {
    /// Whether retrying the whole load could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Feed(e) => e.is_retryable(),
            LoadError::Io { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::TimedOut
            ),
            LoadError::Json { .. } | LoadError::Catalog(_) => false,
        }
    }
}
