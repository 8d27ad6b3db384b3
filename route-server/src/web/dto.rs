//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Station};
use crate::geoapify::GeocodedPlace;
use crate::trip::TripPlan;

/// Request to plan a trip with fuel stops.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    /// Free-text start location
    pub start: Option<String>,

    /// Free-text end location
    pub end: Option<String>,
}

/// A resolved endpoint of the trip.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    /// Resolved display name
    pub name: String,

    /// Resolved coordinate
    pub location: Coordinate,
}

impl PlaceResult {
    fn from_place(place: &GeocodedPlace) -> Self {
        Self {
            name: place.name.clone(),
            location: place.location,
        }
    }
}

/// A fuel stop in the plan.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Station name
    pub name: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// Retail price in dollars per gallon
    pub price_per_gallon: f64,

    /// Station coordinate
    pub location: Coordinate,
}

impl StopResult {
    fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            address: station.address.clone(),
            city: station.city.clone(),
            state: station.state.clone(),
            price_per_gallon: station.retail_price,
            location: station.location,
        }
    }
}

/// Response for a planned trip.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// Resolved start place
    pub start: PlaceResult,

    /// Resolved end place
    pub end: PlaceResult,

    /// Route polyline in travel order
    pub route: Vec<Coordinate>,

    /// Total driving distance in miles
    pub total_distance_miles: f64,

    /// Selected fuel stops in visiting order
    pub stops: Vec<StopResult>,

    /// Total fuel cost in dollars, rounded to cents
    pub total_fuel_cost: f64,
}

impl PlanTripResponse {
    /// Build the response from a planned trip.
    pub fn from_plan(plan: &TripPlan) -> Self {
        Self {
            start: PlaceResult::from_place(&plan.start),
            end: PlaceResult::from_place(&plan.end),
            route: plan.route.polyline.clone(),
            total_distance_miles: plan.route.total_distance_miles,
            stops: plan.stops.iter().map(StopResult::from_station).collect(),
            total_fuel_cost: plan.rounded_cost(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
