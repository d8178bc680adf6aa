//! Trip plan types.
//!
//! A `TripPlan` is a snapshot: it names stops and routes by string rather
//! than borrowing from the network, so it outlives the planning call.

use chrono::NaiveDateTime;

use super::format_clock;

/// Label for the rider's starting point in walk steps.
pub const ORIGIN_LABEL: &str = "Origin";

/// Label for the rider's final destination in walk steps.
pub const DESTINATION_LABEL: &str = "Destination";

/// One step of a shuttle itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Walk between a point and a stop
    Walk {
        from: String,
        to: String,
        minutes: u32,
    },
    /// Wait at a stop for the next shuttle
    Wait {
        at: String,
        route: String,
        minutes: u32,
    },
    /// Ride a shuttle between two stops
    Shuttle {
        route: String,
        from: String,
        to: String,
        minutes: u32,
        /// In-route distance, rounded to two decimal places.
        miles: f64,
    },
}

impl Step {
    /// Duration of this step in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Step::Walk { minutes, .. }
            | Step::Wait { minutes, .. }
            | Step::Shuttle { minutes, .. } => *minutes,
        }
    }

    /// Short uppercase tag for this step kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Walk { .. } => "WALK",
            Step::Wait { .. } => "WAIT",
            Step::Shuttle { .. } => "SHUTTLE",
        }
    }
}

/// Aggregate minutes for an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripTotals {
    pub minutes: u32,
    pub walk_minutes: u32,
    pub wait_minutes: u32,
    pub in_vehicle_minutes: u32,
}

/// A feasible shuttle trip: walk, wait, ride, walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub route_name: String,
    pub origin_stop: String,
    pub dest_stop: String,
    /// Steps in chronological order.
    pub steps: Vec<Step>,
    pub totals: TripTotals,
    pub board_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    /// True if any duration came from an external estimator.
    pub used_external_estimates: bool,
}

impl Itinerary {
    /// Boarding time on a 12-hour clock, e.g. "10:06 AM".
    pub fn board_clock(&self) -> String {
        format_clock(self.board_time)
    }

    /// Arrival time on a 12-hour clock, e.g. "10:10 AM".
    pub fn arrival_clock(&self) -> String {
        format_clock(self.arrival_time)
    }
}

/// Why no shuttle trip could be planned.
///
/// These are expected outcomes, not faults. Each variant carries whatever
/// was resolved before planning stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanFailure {
    /// The two nearest stops are not on any single route
    #[error("no single shuttle route connects the nearest stops")]
    NoConnectingRoute {
        origin_stop: String,
        dest_stop: String,
    },

    /// A connecting route exists but is not running at the requested time
    #[error("{route} not operating at selected time")]
    ServiceInactive {
        route: String,
        origin_stop: String,
        dest_stop: String,
    },

    /// The route is considered active but has no headway for the day type
    #[error("{route} has no service at this time/day")]
    NoHeadwayDefined {
        route: String,
        origin_stop: String,
        dest_stop: String,
    },
}

impl PlanFailure {
    /// Name of the stop nearest the origin.
    pub fn origin_stop(&self) -> &str {
        match self {
            PlanFailure::NoConnectingRoute { origin_stop, .. }
            | PlanFailure::ServiceInactive { origin_stop, .. }
            | PlanFailure::NoHeadwayDefined { origin_stop, .. } => origin_stop,
        }
    }

    /// Name of the stop nearest the destination.
    pub fn dest_stop(&self) -> &str {
        match self {
            PlanFailure::NoConnectingRoute { dest_stop, .. }
            | PlanFailure::ServiceInactive { dest_stop, .. }
            | PlanFailure::NoHeadwayDefined { dest_stop, .. } => dest_stop,
        }
    }

    /// Name of the route, if one was found before planning stopped.
    pub fn route_name(&self) -> Option<&str> {
        match self {
            PlanFailure::NoConnectingRoute { .. } => None,
            PlanFailure::ServiceInactive { route, .. }
            | PlanFailure::NoHeadwayDefined { route, .. } => Some(route.as_str()),
        }
    }
}

/// Outcome of a planning call.
#[derive(Debug, Clone, PartialEq)]
pub enum TripPlan {
    /// A shuttle trip is feasible
    Planned(Itinerary),
    /// No shuttle trip is feasible
    Infeasible(PlanFailure),
}

impl TripPlan {
    /// Returns true if a trip was planned.
    pub fn is_success(&self) -> bool {
        matches!(self, TripPlan::Planned(_))
    }

    /// Returns the itinerary if a trip was planned.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            TripPlan::Planned(it) => Some(it),
            TripPlan::Infeasible(_) => None,
        }
    }

    /// Returns the failure if no trip was planned.
    pub fn failure(&self) -> Option<&PlanFailure> {
        match self {
            TripPlan::Planned(_) => None,
            TripPlan::Infeasible(f) => Some(f),
        }
    }

    /// Route name, if one was resolved.
    pub fn route_name(&self) -> Option<&str> {
        match self {
            TripPlan::Planned(it) => Some(it.route_name.as_str()),
            TripPlan::Infeasible(f) => f.route_name(),
        }
    }

    /// Name of the stop nearest the origin.
    pub fn origin_stop(&self) -> &str {
        match self {
            TripPlan::Planned(it) => &it.origin_stop,
            TripPlan::Infeasible(f) => f.origin_stop(),
        }
    }

    /// Name of the stop nearest the destination.
    pub fn dest_stop(&self) -> &str {
        match self {
            TripPlan::Planned(it) => &it.dest_stop,
            TripPlan::Infeasible(f) => f.dest_stop(),
        }
    }
}
