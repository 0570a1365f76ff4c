//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::planner::{PlanError, Planner, TripRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes/find", post(find_routes))
        .route("/stations/:name", get(get_station))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find ranked metro routes and the direct-taxi verdict between two points.
async fn find_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FindRoutesResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: FindRoutesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let origin = req.origin.to_lat_lng().map_err(|e| AppError::BadRequest {
        message: format!("Invalid origin: {e}"),
    })?;
    let destination = req.destination.to_lat_lng().map_err(|e| AppError::BadRequest {
        message: format!("Invalid destination: {e}"),
    })?;

    info!(
        from = req.origin_address.as_deref().unwrap_or("Unknown"),
        to = req.destination_address.as_deref().unwrap_or("Unknown"),
        %origin,
        %destination,
        "Route request"
    );

    let planner = Planner::new(
        state.estimator.as_ref(),
        &state.stations,
        &state.transit,
        &state.config,
    );
    let recommendation = planner
        .plan(&TripRequest::new(origin, destination))
        .await
        .map_err(AppError::from)?;

    Ok(Json(FindRoutesResponse::from_recommendation(
        &recommendation,
    )))
}

/// Look up a station by exact name.
async fn get_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationView>, AppError> {
    let station = state.stations.get(&name).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown station: {name}"),
    })?;
    Ok(Json(StationView::from_station(station)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
