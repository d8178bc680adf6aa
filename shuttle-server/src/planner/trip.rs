//! Trip planning: nearest stops, connecting route, service check, itinerary.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::domain::{
    Coord, DESTINATION_LABEL, Itinerary, Network, ORIGIN_LABEL, PlanFailure, Step, TripPlan,
    TripTotals, headway_minutes, service_is_active,
};

use super::config::PlannerConfig;
use super::connect::find_connecting_route;
use super::estimate::{DurationEstimator, Estimators};
use super::nearest::find_nearest_stop;

/// External estimates above this many minutes are treated as unavailable.
const MAX_ESTIMATE_MINUTES: u32 = 24 * 60;

/// Request for a shuttle trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    /// Where the rider starts.
    pub origin: Coord,

    /// Where the rider wants to end up.
    pub destination: Coord,

    /// When the rider sets off (local wall-clock time).
    pub when: NaiveDateTime,
}

impl TripRequest {
    /// Create a new trip request.
    pub fn new(origin: Coord, destination: Coord, when: NaiveDateTime) -> Self {
        Self {
            origin,
            destination,
            when,
        }
    }
}

/// Single-route shuttle trip planner.
///
/// Stateless between calls: the same request against the same network and
/// config always yields the same plan when no external estimator is used.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Plan a trip.
    ///
    /// Never fails: infeasible trips are reported as `TripPlan::Infeasible`
    /// with whatever stops and route were resolved.
    pub fn plan(&self, request: &TripRequest, estimators: &Estimators<'_>) -> TripPlan {
        let origin = find_nearest_stop(self.network, request.origin);
        let destination = find_nearest_stop(self.network, request.destination);

        debug!(
            origin_stop = %origin.stop.name,
            origin_miles = origin.miles,
            dest_stop = %destination.stop.name,
            dest_miles = destination.miles,
            "resolved nearest stops"
        );

        let origin_stop = origin.stop.name.clone();
        let dest_stop = destination.stop.name.clone();

        let Some(connection) = find_connecting_route(self.network, origin.stop, destination.stop)
        else {
            return TripPlan::Infeasible(PlanFailure::NoConnectingRoute {
                origin_stop,
                dest_stop,
            });
        };
        let route = connection.route;

        if !service_is_active(route, request.when) {
            return TripPlan::Infeasible(PlanFailure::ServiceInactive {
                route: route.name.clone(),
                origin_stop,
                dest_stop,
            });
        }

        let Some(headway) = headway_minutes(route, request.when) else {
            return TripPlan::Infeasible(PlanFailure::NoHeadwayDefined {
                route: route.name.clone(),
                origin_stop,
                dest_stop,
            });
        };

        let mut used_external = false;

        // Each walk falls back on its own; one may use the estimator while the other does not.
        let walk_to = estimate_or_else(
            estimators.walk_minutes(request.origin, origin.stop.coord),
            &mut used_external,
            || self.config.walking_minutes(origin.miles),
        );
        let walk_from = estimate_or_else(
            estimators.walk_minutes(destination.stop.coord, request.destination),
            &mut used_external,
            || self.config.walking_minutes(destination.miles),
        );

        let wait = self.config.wait_minutes(headway);

        let route_miles = connection.miles();
        let ride = estimate_or_else(
            estimators
                .drive_minutes(origin.stop.coord, destination.stop.coord)
                .map(|mins| self.config.shuttle_minutes_from_drive(mins)),
            &mut used_external,
            || self.config.in_vehicle_minutes(route_miles),
        );

        let board_time = add_minutes(request.when, walk_to.saturating_add(wait));
        let arrival_time = add_minutes(board_time, ride.saturating_add(walk_from));

        let steps = vec![
            Step::Walk {
                from: ORIGIN_LABEL.to_string(),
                to: origin_stop.clone(),
                minutes: walk_to,
            },
            Step::Wait {
                at: origin_stop.clone(),
                route: route.name.clone(),
                minutes: wait,
            },
            Step::Shuttle {
                route: route.name.clone(),
                from: origin_stop.clone(),
                to: dest_stop.clone(),
                minutes: ride,
                miles: round_to_hundredths(route_miles),
            },
            Step::Walk {
                from: dest_stop.clone(),
                to: DESTINATION_LABEL.to_string(),
                minutes: walk_from,
            },
        ];

        let totals = TripTotals {
            minutes: walk_to
                .saturating_add(wait)
                .saturating_add(ride)
                .saturating_add(walk_from),
            walk_minutes: walk_to.saturating_add(walk_from),
            wait_minutes: wait,
            in_vehicle_minutes: ride,
        };

        debug!(
            route = %route.name,
            total_minutes = totals.minutes,
            used_external,
            "planned shuttle trip"
        );

        TripPlan::Planned(Itinerary {
            route_name: route.name.clone(),
            origin_stop,
            dest_stop,
            steps,
            totals,
            board_time,
            arrival_time,
            used_external_estimates: used_external,
        })
    }
}

/// Plan a shuttle trip with the default heuristics.
///
/// `walk` and `drive` are optional external estimators; each call that
/// declines falls back to the straight-line heuristics.
pub fn plan_trip(
    network: &Network,
    origin: Coord,
    destination: Coord,
    when: NaiveDateTime,
    walk: Option<&dyn DurationEstimator>,
    drive: Option<&dyn DurationEstimator>,
) -> TripPlan {
    let config = PlannerConfig::default();
    Planner::new(network, &config).plan(
        &TripRequest::new(origin, destination, when),
        &Estimators::new(walk, drive),
    )
}

fn estimate_or_else(estimate: Option<u32>, used: &mut bool, fallback: impl FnOnce() -> u32) -> u32 {
    match estimate {
        Some(mins) if mins <= MAX_ESTIMATE_MINUTES => {
            *used = true;
            mins
        }
        Some(mins) => {
            debug!(mins, "implausible external estimate, using heuristic");
            fallback()
        }
        None => {
            debug!("no external estimate, using heuristic");
            fallback()
        }
    }
}

// Timestamps past the calendar's end pin to its last instant.
fn add_minutes(when: NaiveDateTime, minutes: u32) -> NaiveDateTime {
    when.checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(NaiveDateTime::MAX)
}

fn round_to_hundredths(miles: f64) -> f64 {
    (miles * 100.0).round_ties_even() / 100.0
}
