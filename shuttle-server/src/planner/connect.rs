//! Route connection: which route links two stops, and how far apart they are.

use crate::domain::{Network, RouteDefinition, SHUTTLE_MPH, Stop, minutes_at_speed};

/// A route that serves both ends of a trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConnection<'n> {
    pub route: &'n RouteDefinition,
    /// Position of the boarding stop in the route.
    pub board_idx: usize,
    /// Position of the alighting stop in the route.
    pub alight_idx: usize,
}

impl RouteConnection<'_> {
    /// Straight-line hop distance between the two stops along the route.
    pub fn miles(&self) -> f64 {
        self.route.miles_between(self.board_idx, self.alight_idx)
    }
}

/// Find the first route, in catalog order, serving both stops at different positions.
///
/// Later routes connecting the same pair are never considered, even if they
/// would be faster.
pub fn find_connecting_route<'n>(
    network: &'n Network,
    origin: &Stop,
    destination: &Stop,
) -> Option<RouteConnection<'n>> {
    network.routes().iter().find_map(|route| {
        let board_idx = route.position_of(&origin.name)?;
        let alight_idx = route.position_of(&destination.name)?;
        (board_idx != alight_idx).then_some(RouteConnection {
            route,
            board_idx,
            alight_idx,
        })
    })
}

/// In-route distance between two stops, in miles.
///
/// Sums the straight-line hops between consecutive stops on the span
/// between the two positions, whichever direction they are given in.
/// Returns `None` if either stop is not on the route.
pub fn distance_along_route(route: &RouteDefinition, a: &Stop, b: &Stop) -> Option<f64> {
    let ia = route.position_of(&a.name)?;
    let ib = route.position_of(&b.name)?;
    Some(route.miles_between(ia, ib))
}

/// Ride time for an in-route distance at 12 mph, never less than three minutes.
pub fn estimate_in_vehicle_minutes(route_miles: f64) -> u32 {
    minutes_at_speed(route_miles, SHUTTLE_MPH, 3)
}
