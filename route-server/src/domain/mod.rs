//! Domain types for the fuel-route planner.
//!
//! This module contains the core value types that flow through the planning
//! pipeline. Coordinates enforce their range invariant at construction time,
//! so code that receives them can trust their validity; stations and routes
//! are read-only inputs once built.

mod coordinate;
mod route;
mod station;

pub use coordinate::{BoundingBox, Coordinate, InvalidCoordinate, distance_miles};
pub use route::{Route, RouteStep};
pub use station::Station;
