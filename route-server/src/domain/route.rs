//! Route polyline returned by the routing provider.

use serde::Serialize;

use super::Coordinate;

/// One leg of a route, as reported by the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStep {
    /// Leg length in miles.
    pub distance_miles: f64,
}

/// An ordered path from origin to destination, inclusive of both endpoints.
///
/// The polyline ordering is the direction of travel. A route produced by the
/// provider conversion always has at least two points; the stop planner
/// rejects anything shorter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Polyline in travel order.
    pub polyline: Vec<Coordinate>,
    /// Total driving distance in miles.
    pub total_distance_miles: f64,
    /// Per-step distances, if the provider reported them; sums to
    /// approximately the total distance. Not consumed by the planner.
    pub steps: Vec<RouteStep>,
}

impl Route {
    /// First point of the polyline.
    pub fn origin(&self) -> Option<Coordinate> {
        self.polyline.first().copied()
    }

    /// Last point of the polyline.
    pub fn destination(&self) -> Option<Coordinate> {
        self.polyline.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let route = Route {
            polyline: vec![
                Coordinate::new(40.0, -88.0).unwrap(),
                Coordinate::new(40.5, -89.0).unwrap(),
                Coordinate::new(41.0, -90.0).unwrap(),
            ],
            total_distance_miles: 120.0,
            steps: vec![],
        };
        assert_eq!(route.origin(), Some(Coordinate::new(40.0, -88.0).unwrap()));
        assert_eq!(
            route.destination(),
            Some(Coordinate::new(41.0, -90.0).unwrap())
        );
    }

    #[test]
    fn empty_polyline_has_no_endpoints() {
        let route = Route {
            polyline: vec![],
            total_distance_miles: 0.0,
            steps: vec![],
        };
        assert_eq!(route.origin(), None);
        assert_eq!(route.destination(), None);
    }
}
