//! Planner configuration.

/// Tunable parameters for corridor filtering and stop planning.
///
/// These are configuration, not baked-in assumptions: callers can widen the
/// corridor or model a different vehicle without touching the algorithm.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Corridor radius around the route, in miles.
    pub corridor_radius_miles: f64,

    /// Maximum distance the vehicle covers on a full fill, in miles.
    pub vehicle_range_miles: f64,

    /// Fuel economy in miles per gallon.
    pub fuel_economy_mpg: f64,
}

impl PlanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(corridor_radius_miles: f64, vehicle_range_miles: f64, fuel_economy_mpg: f64) -> Self {
        Self {
            corridor_radius_miles,
            vehicle_range_miles,
            fuel_economy_mpg,
        }
    }

    /// Set the corridor radius.
    pub fn with_corridor_radius(mut self, miles: f64) -> Self {
        self.corridor_radius_miles = miles;
        self
    }

    /// Set the vehicle range.
    pub fn with_vehicle_range(mut self, miles: f64) -> Self {
        self.vehicle_range_miles = miles;
        self
    }

    /// Set the fuel economy.
    pub fn with_fuel_economy(mut self, mpg: f64) -> Self {
        self.fuel_economy_mpg = mpg;
        self
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            corridor_radius_miles: 10.0,
            vehicle_range_miles: 500.0,
            fuel_economy_mpg: 10.0,
        }
    }
}
