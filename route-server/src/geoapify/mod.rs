//! Geoapify API client (geocoding and truck routing).
//!
//! The upstream provider resolves free-text place names into coordinates and
//! returns truck-profile route polylines between them. Both endpoints take
//! the API key as a query parameter.
//!
//! Key characteristics:
//! - responses are GeoJSON feature collections; an empty feature list means
//!   "no results", which the client surfaces as an error rather than an
//!   empty value
//! - routing geometry is a MultiLineString with one line per leg, in
//!   `[longitude, latitude]` order
//! - distances arrive in the unit the response declares (feet when requesting
//!   imperial units); the client converts everything to miles

mod client;
mod error;
mod types;

pub use client::{GeoapifyClient, GeoapifyConfig};
pub use error::GeoapifyError;
pub use types::GeocodedPlace;
