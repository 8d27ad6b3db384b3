//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::planner::PlanError;
use crate::trip::{TripError, TripPlanner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip/plan", get(plan_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a trip with fuel stops between two free-text locations.
async fn plan_trip(
    State(state): State<AppState>,
    Query(req): Query<PlanTripRequest>,
) -> Result<Json<PlanTripResponse>, AppError> {
    let start = req.start.as_deref().unwrap_or("");
    let end = req.end.as_deref().unwrap_or("");

    let planner = TripPlanner::new(
        state.geoapify.as_ref(),
        state.geoapify.as_ref(),
        state.catalog.as_ref(),
        state.config.as_ref(),
    );

    let plan = planner.plan(start, end).await?;

    Ok(Json(PlanTripResponse::from_plan(&plan)))
}

/// Application-level errors with HTTP status mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Infeasible { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        match e {
            TripError::InvalidRequest(message) => AppError::BadRequest { message },
            TripError::Geocoding { .. } | TripError::Routing { .. } => AppError::Upstream {
                message: e.to_string(),
            },
            TripError::Infeasible(PlanError::NoReachableStation { .. }) => AppError::Infeasible {
                message: format!("no feasible fuel plan: {e}"),
            },
            TripError::Infeasible(other) => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Infeasible { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::geoapify::GeoapifyError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let err = TripError::InvalidRequest("start location is required".into());
        assert_eq!(status_of(err.into()), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failures_map_to_502() {
        let err = TripError::Geocoding {
            place: "Atlantis".into(),
            source: GeoapifyError::NoResults {
                query: "Atlantis".into(),
            },
        };
        assert_eq!(status_of(err.into()), StatusCode::BAD_GATEWAY);

        let err = TripError::Routing {
            source: GeoapifyError::Api {
                status: 503,
                message: "unavailable".into(),
            },
        };
        assert_eq!(status_of(err.into()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn infeasible_route_maps_to_422() {
        let err = TripError::Infeasible(PlanError::NoReachableStation {
            range_miles: 500.0,
            remaining_miles: 712.4,
        });
        assert_eq!(status_of(err.into()), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_route_maps_to_500() {
        let err = TripError::Infeasible(PlanError::InvalidRoute);
        assert_eq!(status_of(err.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn coordinate_serializes_for_responses() {
        let c = Coordinate::new(41.88, -87.63).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["latitude"], 41.88);
        assert_eq!(json["longitude"], -87.63);
    }
}
