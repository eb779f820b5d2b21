use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tube_spotter::cache::{CacheConfig, CachedStatusClient};
use tube_spotter::content::{CatalogHandle, ContentPaths, RetryPolicy};
use tube_spotter::proximity::ProximityConfig;
use tube_spotter::tfl::{MockStatusClient, StatusSource, TflClient, TflConfig};
use tube_spotter::web::{AppState, create_router};

/// How often to refresh line statuses.
const STATUS_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tube_spotter=info")),
        )
        .init();

    // Status source: a saved feed if configured, otherwise live TfL
    let source = match std::env::var("TUBE_SPOTTER_MOCK_STATUS") {
        Ok(path) => {
            info!(%path, "using saved status feed");
            StatusSource::Mock(MockStatusClient::new(path)?)
        }
        Err(_) => {
            let app_key = std::env::var("TFL_APP_KEY").ok();
            if app_key.is_none() {
                warn!("TFL_APP_KEY not set; requests will be rate limited more aggressively");
            }
            StatusSource::Live(TflClient::new(TflConfig::new(app_key))?)
        }
    };
    let statuses = CachedStatusClient::new(source, &CacheConfig::default());

    let defaults = ContentPaths::default();
    let paths = ContentPaths::new(
        env_path("TUBE_SPOTTER_STATIONS").unwrap_or(defaults.stations),
        env_path("TUBE_SPOTTER_LINES").unwrap_or(defaults.associations),
    );

    // Nothing can run without content; retry transient failures, then give up
    let catalog = match CatalogHandle::load(&paths, statuses, RetryPolicy::default()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "content unavailable");
            return Err(e.into());
        }
    };

    let state = AppState::new(catalog, ProximityConfig::default());

    let refresher = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATUS_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            if let Err(e) = refresher.refresh_statuses().await {
                warn!(error = %e, "failed to refresh line statuses");
            }
        }
    });

    let app = create_router(state);

    let addr: SocketAddr = std::env::var("TUBE_SPOTTER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;
    info!(%addr, "tube spotter listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}
