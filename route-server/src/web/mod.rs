//! Web layer for the fuel-route planner.
//!
//! Provides the HTTP endpoint for planning a trip with fuel stops.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
