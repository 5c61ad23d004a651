//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::planner::{JourneyEstimate, Mode, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/shortest_path", get(shortest_path))
        .route("/min_exchanges", get(min_exchanges))
        .route("/api/stations", get(search_stations))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Route with the least total distance.
async fn shortest_path(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    plan(&state, Mode::Shortest, req).await
}

/// Route with the fewest line changes.
async fn min_exchanges(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    plan(&state, Mode::MinimumExchanges, req).await
}

async fn plan(
    state: &AppState,
    mode: Mode,
    req: RouteRequest,
) -> Result<Json<RouteResponse>, AppError> {
    let (Some(source), Some(destination)) = (
        req.source.filter(|s| !s.is_empty()),
        req.destination.filter(|d| !d.is_empty()),
    ) else {
        return Err(AppError::BadRequest {
            message: "Missing parameters".to_string(),
        });
    };

    let entry = state
        .cache
        .get_or_plan(&state.graph, mode, &source, &destination)
        .await;
    let route = entry.as_ref().as_ref().map_err(|e| AppError::from(e.clone()))?;

    let estimate = JourneyEstimate::for_route(route, &state.estimates);
    Ok(Json(RouteResponse::from_route(route, &estimate)))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let needle = req.q.trim().to_lowercase();

    let stations = state
        .graph
        .stations()
        .into_iter()
        .filter(|s| s.as_str().to_lowercase().contains(&needle))
        .take(limit)
        .map(|s| s.as_str().to_string())
        .collect();

    Json(StationSearchResponse { stations })
}

// Error handling

#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::StationNotFound { .. } | RouteError::NoPathFound { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = %status, message = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
