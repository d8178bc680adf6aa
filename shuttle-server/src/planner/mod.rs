//! Shuttle trip planner.
//!
//! This module answers: "can I get from here to there on one shuttle,
//! and how long will it take?"
//!
//! Both ends are snapped to their nearest stops, the first route serving
//! both stops is chosen, its service calendar is checked, and the trip is
//! broken down into walk, wait, ride and walk. External duration
//! estimators refine the walk and ride times when they answer.

mod config;
mod connect;
mod estimate;
mod nearest;
mod trip;

#[cfg(test)]
mod trip_tests;

pub use config::PlannerConfig;
pub use connect::{
    RouteConnection, distance_along_route, estimate_in_vehicle_minutes, find_connecting_route,
};
pub use estimate::{DurationEstimator, Estimators};
pub use nearest::{NearestStop, find_nearest_stop};
pub use trip::{Planner, TripRequest, plan_trip};
