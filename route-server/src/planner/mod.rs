//! Fuel-stop planning engine.
//!
//! This module implements the core algorithm that answers: "driving this
//! route in a vehicle with this range, where should I refuel to spend the
//! least?"
//!
//! Two pure, synchronous stages: the corridor filter narrows the station
//! catalog to the route neighborhood, then the greedy stop planner walks the
//! route committing to the cheapest in-range station that makes forward
//! progress. Neither stage performs I/O or keeps state between calls.

mod config;
mod corridor;
mod stops;

#[cfg(test)]
mod stops_tests;

pub use config::PlanConfig;
pub use corridor::{BBOX_MARGIN_DEG, nearby_stations};
pub use stops::{PlanError, StopPlan, plan_stops};
