//! Geographic coordinates, great-circle distance, and bounding boxes.

use serde::Serialize;
use std::fmt;

/// Mean Earth radius in miles, matching the vehicle-range convention
/// used throughout the planner.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Error returned when constructing a coordinate outside the valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A geographic position in degrees.
///
/// Valid by construction: latitude is within [-90, 90] and longitude within
/// [-180, 180], both finite.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinate;
///
/// let chicago = Coordinate::new(41.8781, -87.6298).unwrap();
/// assert_eq!(chicago.latitude, 41.8781);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating the degree ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                reason: "latitude must be a finite value in [-90, 90]",
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                reason: "longitude must be a finite value in [-180, 180]",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Great-circle distance between two coordinates in miles.
///
/// Haversine formula. Symmetric, zero for identical points, and satisfies
/// the triangle inequality up to floating-point tolerance. Called from the
/// hot loops in corridor filtering and stop selection, so it allocates
/// nothing and has no side effects.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_MILES * 2.0 * h.sqrt().asin()
}

/// An axis-aligned latitude/longitude box.
///
/// Used as a cheap narrowing pass before exact distance checks, and as the
/// query key for the station catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// The smallest box enclosing all `points`, or `None` if there are none.
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };
        for p in &points[1..] {
            bbox.min_lat = bbox.min_lat.min(p.latitude);
            bbox.max_lat = bbox.max_lat.max(p.latitude);
            bbox.min_lon = bbox.min_lon.min(p.longitude);
            bbox.max_lon = bbox.max_lon.max(p.longitude);
        }
        Some(bbox)
    }

    /// Grow every side by `margin_deg` degrees.
    ///
    /// A degree margin is an approximation, not a geodesic buffer: a degree
    /// of longitude shrinks with latitude. That is acceptable here because
    /// the box only narrows the search; exact haversine checks decide
    /// membership afterwards.
    pub fn expanded(self, margin_deg: f64) -> Self {
        Self {
            min_lat: self.min_lat - margin_deg,
            max_lat: self.max_lat + margin_deg,
            min_lon: self.min_lon - margin_deg,
            max_lon: self.max_lon + margin_deg,
        }
    }

    /// Whether `point` lies inside the box (inclusive on all edges).
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lon..=self.max_lon).contains(&point.longitude)
    }
}
