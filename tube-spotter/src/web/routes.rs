//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::content::LoadError;
use crate::domain::{Coordinate, LineId};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines))
        .route("/location", post(update_location))
        .route("/markers", get(list_markers))
        .route("/stations/:name/lines", get(station_lines))
        .route("/statuses/refresh", post(refresh_statuses))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Static line metadata plus the feed timestamp.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let catalog = state.catalog.current().await;

    Json(LinesResponse {
        lines: LineId::ALL.into_iter().map(LineInfo::from).collect(),
        statuses_fetched_at: catalog.statuses().fetched_at().to_rfc3339(),
    })
}

/// Feed a location fix and return the markers to draw.
async fn update_location(
    State(state): State<AppState>,
    Json(req): Json<LocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    let current = Coordinate::new(req.latitude, req.longitude);
    if !current.is_valid() {
        return Err(AppError::BadRequest {
            message: format!("Invalid coordinate: {current:?}"),
        });
    }

    let catalog = state.catalog.current().await;
    let mut session = state.session.lock().await;

    let update = session.filter.update_location(current, &catalog);
    if update.changed {
        session.board.sync(&update.nearby, &catalog);
        info!(
            location = %current,
            markers = session.board.len(),
            "markers refreshed"
        );
    }

    Ok(Json(LocationResponse {
        changed: update.changed,
        added: update.added,
        removed: update.removed,
        markers: session.board.markers().map(MarkerResult::from).collect(),
    }))
}

/// Currently placed markers.
async fn list_markers(State(state): State<AppState>) -> Json<Vec<MarkerResult>> {
    let session = state.session.lock().await;
    Json(session.board.markers().map(MarkerResult::from).collect())
}

/// Lines serving a station, with statuses.
async fn station_lines(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationLinesResponse>, AppError> {
    let catalog = state.catalog.current().await;

    if catalog.station(&name).is_none() {
        return Err(AppError::NotFound {
            message: format!("Unknown station: {name}"),
        });
    }

    let lines = catalog.resolve(&name).iter().map(LineResult::from).collect();

    Ok(Json(StationLinesResponse {
        station: name,
        lines,
    }))
}

/// Drop cached statuses and fetch the feed again.
async fn refresh_statuses(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let statuses = state.refresh_statuses().await?;
    Ok(Json(RefreshResponse { statuses }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Unavailable {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
