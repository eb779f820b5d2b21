//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use tracing::debug;

use crate::content::{CatalogHandle, LoadError};
use crate::markers::MarkerBoard;
use crate::proximity::{ProximityConfig, ProximityFilter};

/// Per-client tracking state, mutated once per location fix.
#[derive(Debug, Default)]
pub struct Session {
    pub filter: ProximityFilter,
    pub board: MarkerBoard,
}

impl Session {
    pub fn new(config: ProximityConfig) -> Self {
        Self {
            filter: ProximityFilter::new(config),
            board: MarkerBoard::new(),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Current catalog, refreshable
    pub catalog: CatalogHandle,

    /// Location tracking; the mutex serializes updates
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(catalog: CatalogHandle, proximity: ProximityConfig) -> Self {
        Self {
            catalog,
            session: Arc::new(Mutex::new(Session::new(proximity))),
        }
    }

    /// Drop cached statuses, fetch the feed again and re-resolve the lines
    /// on every placed marker.
    ///
    /// On failure both the catalog and the markers are left as they were.
    pub async fn refresh_statuses(&self) -> Result<usize, LoadError> {
        let count = self.catalog.force_refresh_statuses().await?;

        let catalog = self.catalog.current().await;
        let mut session = self.session.lock().await;
        session.board.refresh(&catalog);
        debug!(markers = session.board.len(), "markers re-resolved");

        Ok(count)
    }
}
