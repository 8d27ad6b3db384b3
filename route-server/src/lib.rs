//! Fuel-route planner server.
//!
//! A web service that answers: "driving a truck from here to there,
//! where should I refuel to spend the least?"

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod geoapify;
pub mod planner;
pub mod trip;
pub mod web;
