//! Trip planning pipeline.
//!
//! Composes the collaborators end to end: geocode both place names, fetch
//! the truck route, narrow the station catalog to the route corridor, then
//! run the greedy stop planner. Each call owns its working collections and
//! nothing is shared between requests, so independent trips can be planned
//! concurrently without locking.

use crate::cache::CachedGeoapifyClient;
use crate::catalog::StationCatalog;
use crate::domain::{BoundingBox, Coordinate, Route, Station};
use crate::geoapify::{GeoapifyClient, GeoapifyError, GeocodedPlace};
use crate::planner::{BBOX_MARGIN_DEG, PlanConfig, PlanError, StopPlan, nearby_stations, plan_stops};

/// Error from trip planning.
///
/// The three classes matter to callers: invalid input is theirs to fix,
/// upstream failures are service faults, and an infeasible route is a
/// legitimate domain outcome that deserves its own presentation.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    /// Missing or blank start/end input; caller-correctable.
    #[error("invalid trip request: {0}")]
    InvalidRequest(String),

    /// The geocoder failed or found nothing for a place.
    #[error("geocoding failed for {place:?}: {source}")]
    Geocoding {
        place: String,
        source: GeoapifyError,
    },

    /// The routing provider failed or found no route.
    #[error("routing failed: {source}")]
    Routing {
        #[source]
        source: GeoapifyError,
    },

    /// The stop planner could not complete the route.
    #[error(transparent)]
    Infeasible(#[from] PlanError),
}

/// Trait for resolving place text into coordinates.
///
/// This abstraction allows the pipeline to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// Resolve a free-text place name, or fail if it is unresolvable.
    async fn geocode(&self, place: &str) -> Result<GeocodedPlace, GeoapifyError>;
}

/// Trait for fetching a route between two coordinates.
#[allow(async_fn_in_trait)]
pub trait RouteProvider {
    /// Fetch a truck route, or fail if none exists.
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, GeoapifyError>;
}

impl Geocoder for GeoapifyClient {
    async fn geocode(&self, place: &str) -> Result<GeocodedPlace, GeoapifyError> {
        GeoapifyClient::geocode(self, place).await
    }
}

impl RouteProvider for GeoapifyClient {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, GeoapifyError> {
        GeoapifyClient::route(self, origin, destination).await
    }
}

impl Geocoder for CachedGeoapifyClient {
    async fn geocode(&self, place: &str) -> Result<GeocodedPlace, GeoapifyError> {
        CachedGeoapifyClient::geocode(self, place).await
    }
}

impl RouteProvider for CachedGeoapifyClient {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, GeoapifyError> {
        CachedGeoapifyClient::route(self, origin, destination).await
    }
}

/// A complete planned trip.
#[derive(Debug, Clone)]
pub struct TripPlan {
    /// Resolved start place.
    pub start: GeocodedPlace,

    /// Resolved end place.
    pub end: GeocodedPlace,

    /// The driving route.
    pub route: Route,

    /// Selected fuel stops in visiting order.
    pub stops: Vec<Station>,

    /// Total fuel spend in dollars, unrounded.
    pub total_cost: f64,
}

impl TripPlan {
    /// Fuel cost rounded to cents for presentation.
    pub fn rounded_cost(&self) -> f64 {
        (self.total_cost * 100.0).round() / 100.0
    }
}

/// Plans trips by composing the geocoder, router, catalog, and stop planner.
pub struct TripPlanner<'a, G, R> {
    geocoder: &'a G,
    router: &'a R,
    catalog: &'a StationCatalog,
    config: &'a PlanConfig,
}

impl<'a, G: Geocoder, R: RouteProvider> TripPlanner<'a, G, R> {
    /// Create a new trip planner.
    pub fn new(
        geocoder: &'a G,
        router: &'a R,
        catalog: &'a StationCatalog,
        config: &'a PlanConfig,
    ) -> Self {
        Self {
            geocoder,
            router,
            catalog,
            config,
        }
    }

    /// Plan a trip between two free-text place names.
    pub async fn plan(&self, start: &str, end: &str) -> Result<TripPlan, TripError> {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() {
            return Err(TripError::InvalidRequest(
                "start location is required".to_string(),
            ));
        }
        if end.is_empty() {
            return Err(TripError::InvalidRequest(
                "end location is required".to_string(),
            ));
        }

        let (start_place, end_place) = tokio::join!(
            self.geocoder.geocode(start),
            self.geocoder.geocode(end),
        );
        let start_place = start_place.map_err(|source| TripError::Geocoding {
            place: start.to_string(),
            source,
        })?;
        let end_place = end_place.map_err(|source| TripError::Geocoding {
            place: end.to_string(),
            source,
        })?;

        let route = self
            .router
            .route(start_place.location, end_place.location)
            .await
            .map_err(|source| TripError::Routing { source })?;

        // Catalog lookup by the expanded route box, then the exact corridor
        // pass with the configured radius.
        let candidates = match BoundingBox::enclosing(&route.polyline) {
            Some(bbox) => self.catalog.query(&bbox.expanded(BBOX_MARGIN_DEG)),
            None => Vec::new(),
        };
        let candidates =
            nearby_stations(&route.polyline, candidates, self.config.corridor_radius_miles);

        let StopPlan { stops, total_cost } = plan_stops(
            &route.polyline,
            candidates,
            self.config.vehicle_range_miles,
            self.config.fuel_economy_mpg,
        )?;

        tracing::info!(
            start = %start_place.name,
            end = %end_place.name,
            route_miles = route.total_distance_miles,
            stops = stops.len(),
            "planned trip"
        );

        Ok(TripPlan {
            start: start_place,
            end: end_place,
            route,
            stops,
            total_cost,
        })
    }
}
