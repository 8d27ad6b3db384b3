//! Greedy fuel-stop selection.
//!
//! Walks the route from origin toward the destination, committing at each
//! step to the cheapest station that is reachable on the current fill and
//! strictly closer to the destination. The selection never backtracks or
//! reconsiders a choice, so the result is locally optimal only; that
//! behavior is the contract, not a shortcut to be fixed.

use crate::domain::{Coordinate, Station, distance_miles};

/// Error from stop planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Route polyline too short to plan over.
    #[error("route must contain at least two points")]
    InvalidRoute,

    /// No station is both within range and closer to the destination: the
    /// trip cannot be completed with the available network. Terminal, not
    /// retryable; the same inputs always fail the same way.
    #[error("no reachable station within {range_miles} mi with {remaining_miles:.1} mi still to cover")]
    NoReachableStation {
        range_miles: f64,
        remaining_miles: f64,
    },
}

/// The selected stops in visiting order plus the total fuel spend.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPlan {
    pub stops: Vec<Station>,
    /// Unrounded total cost in dollars; use [`StopPlan::rounded_cost`]
    /// for display.
    pub total_cost: f64,
}

impl StopPlan {
    /// Total cost rounded to cents.
    pub fn rounded_cost(&self) -> f64 {
        (self.total_cost * 100.0).round() / 100.0
    }
}

/// Plan fuel stops along `route` from the candidate stations.
///
/// While the destination is farther than `vehicle_range_miles` from the
/// current position, picks the cheapest candidate that is within range
/// (inclusive boundary: a station exactly at range distance is reachable)
/// and strictly closer to the destination than the current position. Price
/// ties go to the earlier candidate in input order. Each chosen station is
/// visited at most once; its fill cost is `distance / fuel_economy * price`.
///
/// A route already within range end-to-end yields zero stops and zero cost.
/// If at any step no candidate qualifies, the plan fails with
/// [`PlanError::NoReachableStation`].
pub fn plan_stops(
    route: &[Coordinate],
    candidates: Vec<Station>,
    vehicle_range_miles: f64,
    fuel_economy_mpg: f64,
) -> Result<StopPlan, PlanError> {
    let (&origin, rest) = route.split_first().ok_or(PlanError::InvalidRoute)?;
    let &destination = rest.last().ok_or(PlanError::InvalidRoute)?;

    let mut position = origin;
    let mut remaining = candidates;
    let mut stops: Vec<Station> = Vec::new();
    let mut total_cost = 0.0;

    loop {
        let miles_to_destination = distance_miles(position, destination);
        if miles_to_destination <= vehicle_range_miles {
            break;
        }

        // Cheapest station reachable on the current fill that makes forward
        // progress. Strict comparison keeps the first candidate on ties.
        let mut chosen: Option<(usize, f64)> = None;
        for (idx, station) in remaining.iter().enumerate() {
            let miles_from_here = distance_miles(position, station.location);
            if miles_from_here > vehicle_range_miles {
                continue;
            }
            if distance_miles(station.location, destination) >= miles_to_destination {
                continue;
            }
            let better = match chosen {
                Some((best_idx, _)) => station.retail_price < remaining[best_idx].retail_price,
                None => true,
            };
            if better {
                chosen = Some((idx, miles_from_here));
            }
        }

        let Some((idx, miles_from_here)) = chosen else {
            return Err(PlanError::NoReachableStation {
                range_miles: vehicle_range_miles,
                remaining_miles: miles_to_destination,
            });
        };

        // Order-preserving removal keeps the input-order tie-break stable
        // for later iterations.
        let station = remaining.remove(idx);
        total_cost += miles_from_here / fuel_economy_mpg * station.retail_price;
        position = station.location;
        stops.push(station);
    }

    Ok(StopPlan { stops, total_cost })
}
