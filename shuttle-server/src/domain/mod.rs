//! Domain types for the shuttle trip planner.
//!
//! This module contains the static network model (stops, routes, service
//! windows), the service calendar, and the trip plan produced by the
//! planner. Networks enforce their invariants at construction time, so
//! code that receives a `Network` can trust its validity.

mod calendar;
mod clock;
mod error;
mod geo;
mod network;
mod plan;
mod route;
mod stop;

pub use calendar::{DayType, headway_minutes, is_weekend, service_is_active};
pub use clock::{ClockError, format_clock, format_duration_mins, parse_clock};
pub use error::NetworkError;
pub use geo::{
    Coord, EARTH_RADIUS_MILES, InvalidCoord, SHUTTLE_MPH, WALKING_MPH,
    great_circle_distance_miles, minutes_at_speed, walking_minutes_heuristic,
};
pub use network::Network;
pub use plan::{
    DESTINATION_LABEL, Itinerary, ORIGIN_LABEL, PlanFailure, Step, TripPlan, TripTotals,
};
pub use route::{RouteDefinition, ServiceWindow, minutes_since_midnight};
pub use stop::Stop;
