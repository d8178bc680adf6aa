//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::directions::DirectionsEstimator;
use crate::domain::Coord;
use crate::planner::{Estimators, Planner, TripRequest, find_nearest_stop};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/shuttle/routes", get(list_routes))
        .route("/shuttle/places", get(list_places))
        .route("/shuttle/stops/nearest", get(nearest_stop))
        .route("/shuttle/plan", post(plan_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all routes with their stops and schedules.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let routes = state
        .network
        .routes()
        .iter()
        .map(RouteResult::from_route)
        .collect();

    Json(RoutesResponse { routes })
}

/// List named location presets.
async fn list_places(State(state): State<AppState>) -> Json<PlacesResponse> {
    let places = state.places.iter().map(PlaceResult::from_place).collect();
    Json(PlacesResponse { places })
}

/// Find the stop nearest a coordinate.
async fn nearest_stop(
    State(state): State<AppState>,
    Query(query): Query<NearestStopQuery>,
) -> Result<Json<NearestStopResponse>, AppError> {
    let coord = Coord::new(query.lat, query.lon).map_err(|e| AppError::BadRequest {
        message: format!("Invalid coordinate: {e}"),
    })?;

    let nearest = find_nearest_stop(&state.network, coord);
    let routes = state
        .network
        .routes_serving(&nearest.stop.name)
        .map(|r| r.name.clone())
        .collect();

    Ok(Json(NearestStopResponse {
        stop: StopResult::from_stop(nearest.stop),
        miles: nearest.miles,
        routes,
    }))
}

/// Plan a shuttle trip between two locations.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanTripResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "rejected plan request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let origin = resolve_location(&state, &req.origin, "origin")?;
    let destination = resolve_location(&state, &req.destination, "destination")?;

    let when = match req.when.as_deref() {
        Some(s) => parse_when(s).ok_or_else(|| AppError::BadRequest {
            message: format!("Invalid time {s:?}: expected YYYY-MM-DDTHH:MM"),
        })?,
        None => Local::now().naive_local(),
    };

    let request = TripRequest::new(origin, destination, when);
    let planner = Planner::new(&state.network, &state.config);

    let plan = match &state.directions {
        Some(client) => {
            let walk = DirectionsEstimator::walking(client.clone());
            let drive = DirectionsEstimator::driving(client.clone());
            planner.plan(&request, &Estimators::new(Some(&walk), Some(&drive)))
        }
        None => planner.plan(&request, &Estimators::none()),
    };

    if let Some(failure) = plan.failure() {
        debug!(%failure, "no feasible shuttle trip");
    }

    Ok(Json(PlanTripResponse::from_plan(&plan)))
}

/// Turn a request location into a coordinate.
fn resolve_location(
    state: &AppState,
    location: &LocationInput,
    field: &str,
) -> Result<Coord, AppError> {
    match location {
        LocationInput::Coords { lat, lon } => {
            Coord::new(*lat, *lon).map_err(|e| AppError::BadRequest {
                message: format!("Invalid {field} coordinate: {e}"),
            })
        }
        LocationInput::Place { place } => state
            .places
            .find(place)
            .map(|p| p.coord)
            .ok_or_else(|| AppError::NotFound {
                message: format!("Unknown {field} place: {place}"),
            }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
