//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::navitia::NavitiaError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/nearby", get(nearby_stations))
        .route("/api/journeys", get(search_journeys))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:line_id/stations", get(line_stations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Autocomplete stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationsResponse> {
    let stations = state.adapter.search_stations(&req.q).await;
    Json(StationsResponse::from_stations(&stations))
}

/// Itineraries between two place ids.
async fn search_journeys(
    State(state): State<AppState>,
    Query(req): Query<JourneySearchRequest>,
) -> Json<RoutesResponse> {
    let routes = state.adapter.search_routes(&req.from, &req.to).await;
    Json(RoutesResponse {
        routes: routes.iter().map(RouteResult::from).collect(),
    })
}

/// Metro and RER line catalog.
async fn list_lines(State(state): State<AppState>) -> Json<LineCatalogResponse> {
    let lines = state.adapter.get_lines().await;
    Json(LineCatalogResponse {
        lines: lines.iter().map(LineResult::from).collect(),
    })
}

/// Stations served by a line.
async fn line_stations(
    State(state): State<AppState>,
    Path(line_id): Path<String>,
) -> Json<StationsResponse> {
    let stations = state.adapter.get_stations_by_line(&line_id).await;
    Json(StationsResponse::from_stations(&stations))
}

/// Stations near a coordinate. The only endpoint that reports failures.
async fn nearby_stations(
    State(state): State<AppState>,
    Query(req): Query<NearbyStationsRequest>,
) -> Result<Json<StationsResponse>, AppError> {
    let stations = state.adapter.get_nearby_stations(req.lat, req.lon).await?;
    Ok(Json(StationsResponse::from_stations(&stations)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The upstream service could not answer
    Upstream { message: String },
}

impl From<NavitiaError> for AppError {
    fn from(e: NavitiaError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        error!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
