//! Fuel station record.

use serde::Serialize;
use std::fmt;

use super::Coordinate;

/// A fuel station from the imported catalog.
///
/// Read-only input to the planner; identity is by value and stations are
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Retail fuel price in dollars per gallon. Never negative.
    pub retail_price: f64,
    pub location: Coordinate,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.city, self.state)
    }
}
