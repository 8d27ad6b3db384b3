//! Corridor filter: narrow the station catalog to the route neighborhood.

use crate::domain::{BoundingBox, Coordinate, Station, distance_miles};

/// Degree margin added to the route bounding box before the exact pass.
///
/// A degree margin is an approximation, not a geodesic buffer (a degree of
/// longitude shrinks with latitude). Accepted: the box is only a cheap
/// narrowing step, and the haversine refinement decides membership.
pub const BBOX_MARGIN_DEG: f64 = 0.1;

/// Stations with at least one route point within `radius_miles` (inclusive).
///
/// Two phases: a bounding-box prefilter over the expanded route box, then
/// exact haversine refinement against every route point. The result is
/// sorted ascending by retail price; the sort is stable, so price ties keep
/// their input order, which the greedy stop planner's tie-break relies on.
///
/// An empty route or catalog yields an empty result, never an error.
pub fn nearby_stations(
    route: &[Coordinate],
    stations: Vec<Station>,
    radius_miles: f64,
) -> Vec<Station> {
    let Some(bbox) = BoundingBox::enclosing(route) else {
        return Vec::new();
    };
    let bbox = bbox.expanded(BBOX_MARGIN_DEG);

    let mut nearby: Vec<Station> = stations
        .into_iter()
        .filter(|station| bbox.contains(station.location))
        .filter(|station| {
            route
                .iter()
                .any(|&point| distance_miles(point, station.location) <= radius_miles)
        })
        .collect();

    nearby.sort_by(|a, b| a.retail_price.total_cmp(&b.retail_price));
    nearby
}
