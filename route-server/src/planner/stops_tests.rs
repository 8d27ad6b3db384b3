//! Unit tests for the greedy stop-selection algorithm.

use super::*;
use crate::domain::{Coordinate, Station, distance_miles};

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn station(name: &str, price: f64, lat: f64, lon: f64) -> Station {
    Station {
        name: name.to_string(),
        address: String::new(),
        city: String::new(),
        state: String::new(),
        retail_price: price,
        location: coord(lat, lon),
    }
}

/// Latitude offset corresponding to `miles` along a meridian.
fn miles_to_lat(miles: f64) -> f64 {
    let per_degree = distance_miles(coord(0.0, 0.0), coord(1.0, 0.0));
    miles / per_degree
}

/// A straight route running north from the equator for `miles` miles.
fn northbound_route(miles: f64) -> Vec<Coordinate> {
    vec![coord(0.0, 0.0), coord(miles_to_lat(miles), 0.0)]
}

/// A station `miles` miles up the same meridian.
fn station_at_mile(name: &str, price: f64, miles: f64) -> Station {
    station(name, price, miles_to_lat(miles), 0.0)
}

#[test]
fn route_within_range_needs_no_stops() {
    // 50 mi trip, 500 mi range.
    let route = northbound_route(50.0);
    let candidates = vec![station_at_mile("unnecessary", 1.0, 25.0)];

    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    assert!(plan.stops.is_empty());
    assert_eq!(plan.total_cost, 0.0);
}

#[test]
fn single_midpoint_station() {
    // 1000 mi trip, one station at the midpoint, price 3.00/gal, 10 mpg.
    // Range 505 leaves a little slack so the midpoint is not sitting on a
    // floating-point knife edge; the exact boundary is covered separately.
    let route = northbound_route(1000.0);
    let candidates = vec![station_at_mile("midpoint", 3.00, 500.0)];

    let plan = plan_stops(&route, candidates, 505.0, 10.0).unwrap();
    assert_eq!(plan.stops.len(), 1);
    assert_eq!(plan.stops[0].name, "midpoint");
    // 500 miles / 10 mpg * 3.00/gal = 150.00
    assert!((plan.rounded_cost() - 150.0).abs() < 0.01, "{}", plan.total_cost);
}

#[test]
fn station_exactly_at_range_is_reachable() {
    // Inclusive boundary: set the range to the computed distance so the
    // comparison is exactly equal, not approximately so.
    let route = northbound_route(1000.0);
    let edge = station_at_mile("edge", 3.00, 600.0);
    let range = distance_miles(route[0], edge.location);

    let plan = plan_stops(&route, vec![edge], range, 10.0).unwrap();
    assert_eq!(plan.stops.len(), 1);
    assert_eq!(plan.stops[0].name, "edge");
}

#[test]
fn prefers_cheaper_station_over_farther_progress() {
    // Both stations are in range and forward-progressing;
    // the cheaper one wins even though it leaves more miles to cover.
    let route = northbound_route(900.0);
    let candidates = vec![
        station_at_mile("far-but-pricey", 4.00, 450.0),
        station_at_mile("near-but-cheap", 2.50, 200.0),
    ];

    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    assert_eq!(plan.stops[0].name, "near-but-cheap");
}

#[test]
fn station_behind_position_is_rejected() {
    // The only in-range station is behind the start, so it
    // makes no forward progress and the plan is infeasible.
    let route = vec![coord(miles_to_lat(100.0), 0.0), coord(miles_to_lat(1100.0), 0.0)];
    let candidates = vec![station_at_mile("behind", 1.00, 50.0)];

    let err = plan_stops(&route, candidates, 500.0, 10.0).unwrap_err();
    assert!(matches!(err, PlanError::NoReachableStation { .. }));
}

#[test]
fn no_candidates_at_all_is_infeasible() {
    let route = northbound_route(1000.0);
    let err = plan_stops(&route, Vec::new(), 500.0, 10.0).unwrap_err();
    assert!(matches!(
        err,
        PlanError::NoReachableStation { range_miles, .. } if range_miles == 500.0
    ));
}

#[test]
fn stationary_candidate_is_rejected() {
    // A station no closer to the destination than the current position
    // fails the strict forward-progress test even though it is in range.
    let route = northbound_route(1000.0);
    let candidates = vec![station_at_mile("at-origin", 1.00, 0.0)];

    let err = plan_stops(&route, candidates, 500.0, 10.0).unwrap_err();
    assert!(matches!(err, PlanError::NoReachableStation { .. }));
}

#[test]
fn multi_stop_trip_accumulates_cost() {
    // 1390 mi trip with 500 mi range needs at least two stops.
    let route = northbound_route(1390.0);
    let candidates = vec![
        station_at_mile("first", 3.00, 450.0),
        station_at_mile("second", 3.50, 900.0),
    ];

    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    let names: Vec<_> = plan.stops.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);

    // 450 mi to the first at 3.00, then 450 mi to the second at 3.50.
    let expected = 450.0 / 10.0 * 3.00 + 450.0 / 10.0 * 3.50;
    assert!((plan.total_cost - expected).abs() < 1.0, "{}", plan.total_cost);
}

#[test]
fn each_station_visited_at_most_once() {
    // The only station is removed after its first use, so a trip that would
    // need it twice becomes infeasible rather than looping.
    let route = northbound_route(1400.0);
    let candidates = vec![station_at_mile("only", 3.00, 450.0)];

    let err = plan_stops(&route, candidates, 500.0, 10.0).unwrap_err();
    assert!(matches!(err, PlanError::NoReachableStation { .. }));
}

#[test]
fn no_station_returned_twice_and_cost_non_negative() {
    let route = northbound_route(2000.0);
    let candidates = vec![
        station_at_mile("a", 3.10, 400.0),
        station_at_mile("b", 2.80, 850.0),
        station_at_mile("c", 3.40, 1300.0),
        station_at_mile("d", 3.00, 1700.0),
    ];

    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    assert!(plan.total_cost >= 0.0);

    let mut names: Vec<_> = plan.stops.iter().map(|s| s.name.clone()).collect();
    let before = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), before, "a station was visited twice");
}

#[test]
fn price_tie_goes_to_input_order() {
    let route = northbound_route(890.0);
    let candidates = vec![
        station_at_mile("first-listed", 3.00, 300.0),
        station_at_mile("second-listed", 3.00, 400.0),
    ];

    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    assert_eq!(plan.stops[0].name, "first-listed");
}

#[test]
fn zero_price_station_is_legal_and_preferred() {
    let route = northbound_route(900.0);
    let candidates = vec![
        station_at_mile("paid", 3.00, 450.0),
        station_at_mile("free", 0.00, 300.0),
    ];

    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    assert_eq!(plan.stops[0].name, "free");
}

#[test]
fn cost_is_monotonic_across_stops() {
    let route = northbound_route(2000.0);
    let candidates = vec![
        station_at_mile("a", 3.10, 400.0),
        station_at_mile("b", 2.80, 850.0),
        station_at_mile("c", 3.40, 1300.0),
        station_at_mile("d", 3.00, 1700.0),
    ];

    // Replay the greedy walk, checking the running cost never decreases.
    let plan = plan_stops(&route, candidates, 500.0, 10.0).unwrap();
    let mut position = route[0];
    let mut running = 0.0;
    for stop in &plan.stops {
        let leg = distance_miles(position, stop.location);
        let next = running + leg / 10.0 * stop.retail_price;
        assert!(next >= running);
        running = next;
        position = stop.location;
    }
    assert!((running - plan.total_cost).abs() < 1e-9);
}

#[test]
fn short_route_is_invalid() {
    assert_eq!(
        plan_stops(&[], Vec::new(), 500.0, 10.0).unwrap_err(),
        PlanError::InvalidRoute
    );
    assert_eq!(
        plan_stops(&[coord(0.0, 0.0)], Vec::new(), 500.0, 10.0).unwrap_err(),
        PlanError::InvalidRoute
    );
}

#[test]
fn rounded_cost_rounds_to_cents() {
    let plan = StopPlan {
        stops: Vec::new(),
        total_cost: 149.996,
    };
    assert_eq!(plan.rounded_cost(), 150.0);

    let plan = StopPlan {
        stops: Vec::new(),
        total_cost: 149.994,
    };
    assert_eq!(plan.rounded_cost(), 149.99);
}
