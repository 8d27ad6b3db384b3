//! Geoapify response types and conversion to domain types.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Route, RouteStep, distance_miles};

use super::error::GeoapifyError;

/// A geocoded place: the resolved display name and its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodedPlace {
    pub name: String,
    pub location: Coordinate,
}

/// Geocoding search response (GeoJSON feature collection).
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeFeature {
    pub properties: GeocodeProperties,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeProperties {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub formatted: Option<String>,
}

/// Routing response (GeoJSON feature collection).
#[derive(Debug, Deserialize)]
pub struct RoutingResponse {
    #[serde(default)]
    pub features: Vec<RoutingFeature>,
}

#[derive(Debug, Deserialize)]
pub struct RoutingFeature {
    pub geometry: RoutingGeometry,
    pub properties: RoutingProperties,
}

/// MultiLineString geometry: one line per leg, points in [lon, lat] order.
/// Points are kept as raw vectors because the provider may append extra
/// elements such as elevation.
#[derive(Debug, Deserialize)]
pub struct RoutingGeometry {
    #[serde(default)]
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
pub struct RoutingProperties {
    /// Total route distance in the declared unit.
    pub distance: Option<f64>,
    /// Unit system of the response: "imperial" (feet) or "metric" (meters).
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub legs: Vec<RoutingLeg>,
}

#[derive(Debug, Deserialize)]
pub struct RoutingLeg {
    #[serde(default)]
    pub steps: Vec<RoutingLegStep>,
}

#[derive(Debug, Deserialize)]
pub struct RoutingLegStep {
    pub distance: Option<f64>,
}

const FEET_PER_MILE: f64 = 5280.0;
const METERS_PER_MILE: f64 = 1609.344;

fn to_miles(value: f64, units: Option<&str>) -> Result<f64, GeoapifyError> {
    match units {
        Some("imperial") => Ok(value / FEET_PER_MILE),
        Some("metric") | None => Ok(value / METERS_PER_MILE),
        Some(other) => Err(GeoapifyError::Malformed(format!(
            "unknown unit system {other:?}"
        ))),
    }
}

/// Convert a geocoding response to a place, taking the first feature.
pub(super) fn convert_geocode(
    query: &str,
    response: GeocodeResponse,
) -> Result<GeocodedPlace, GeoapifyError> {
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| GeoapifyError::NoResults {
            query: query.to_string(),
        })?;

    let props = feature.properties;
    let (Some(lat), Some(lon)) = (props.lat, props.lon) else {
        return Err(GeoapifyError::Malformed(
            "geocode feature is missing lat/lon".to_string(),
        ));
    };
    let location = Coordinate::new(lat, lon)
        .map_err(|e| GeoapifyError::Malformed(format!("geocode feature: {e}")))?;

    let name = props
        .city
        .or(props.formatted)
        .unwrap_or_else(|| query.to_string());

    Ok(GeocodedPlace { name, location })
}

/// Convert a routing feature to a domain route.
///
/// Concatenates all legs of the MultiLineString into one polyline, dropping
/// the duplicated boundary point between consecutive legs. Falls back to
/// summing haversine segment lengths if the provider omits the total
/// distance.
pub(super) fn convert_route(feature: RoutingFeature) -> Result<Route, GeoapifyError> {
    let units = feature.properties.units.as_deref();

    let mut polyline: Vec<Coordinate> = Vec::new();
    for line in &feature.geometry.coordinates {
        for point in line {
            if point.len() < 2 {
                return Err(GeoapifyError::Malformed(format!(
                    "route point has {} elements, expected [lon, lat]",
                    point.len()
                )));
            }
            let (lon, lat) = (point[0], point[1]);
            let coord = Coordinate::new(lat, lon)
                .map_err(|e| GeoapifyError::Malformed(format!("route point: {e}")))?;
            if polyline.last() != Some(&coord) {
                polyline.push(coord);
            }
        }
    }

    if polyline.len() < 2 {
        return Err(GeoapifyError::Malformed(
            "route polyline has fewer than two points".to_string(),
        ));
    }

    let total_distance_miles = match feature.properties.distance {
        Some(d) => to_miles(d, units)?,
        None => polyline
            .windows(2)
            .map(|pair| distance_miles(pair[0], pair[1]))
            .sum(),
    };

    let steps = feature
        .properties
        .legs
        .iter()
        .flat_map(|leg| &leg.steps)
        .filter_map(|step| step.distance)
        .map(|d| to_miles(d, units).map(|distance_miles| RouteStep { distance_miles }))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route {
        polyline,
        total_distance_miles,
        steps,
    })
}
