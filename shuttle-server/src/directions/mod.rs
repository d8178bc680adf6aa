//! Google Directions API client.
//!
//! Supplies real walking and driving times to the planner. Every failure
//! degrades to the distance heuristics rather than failing a plan.

mod client;
mod error;
mod estimator;
mod types;

pub use client::{DirectionsClient, DirectionsConfig, TravelMode, parse_duration_minutes};
pub use error::DirectionsError;
pub use estimator::DirectionsEstimator;
pub use types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, Measure};
