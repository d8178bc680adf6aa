//! The shuttle network: an immutable catalog of routes and their stops.

use std::collections::HashSet;

use super::{NetworkError, RouteDefinition, Stop};

/// A validated, read-only set of routes.
///
/// Built once at startup and shared (typically behind an `Arc`) by every
/// planning call. Nothing mutates it after construction.
///
/// # Invariants
///
/// - At least one stop
/// - Every route has at least two stops and no stop twice
/// - Route names are unique
/// - Headways are positive and service windows are ordered
#[derive(Debug, Clone)]
pub struct Network {
    routes: Vec<RouteDefinition>,
    /// De-duplicated stops in order of first appearance.
    stops: Vec<Stop>,
}

impl Network {
    /// Validate a route catalog and build the network.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found, in catalog order.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, NetworkError> {
        let mut route_names = HashSet::new();

        for route in &routes {
            if !route_names.insert(route.name.as_str()) {
                return Err(NetworkError::DuplicateRoute(route.name.clone()));
            }
            validate_route(route)?;
        }

        // First-seen wins when two routes carry the same stop name.
        let mut seen = HashSet::new();
        let stops: Vec<Stop> = routes
            .iter()
            .flat_map(|r| r.stops.iter())
            .filter(|s| seen.insert(s.name.as_str()))
            .cloned()
            .collect();

        if stops.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }

        Ok(Self { routes, stops })
    }

    /// All routes, in catalog order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// All distinct stops, in order of first appearance.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Look up a route by name.
    pub fn route(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.is_named(name))
    }

    /// Routes serving the named stop, in catalog order.
    pub fn routes_serving<'a>(
        &'a self,
        stop_name: &'a str,
    ) -> impl Iterator<Item = &'a RouteDefinition> + 'a {
        self.routes.iter().filter(move |r| r.serves(stop_name))
    }
}

fn validate_route(route: &RouteDefinition) -> Result<(), NetworkError> {
    if route.stops.len() < 2 {
        return Err(NetworkError::RouteTooShort(route.name.clone()));
    }

    let mut names = HashSet::new();
    for stop in &route.stops {
        if !names.insert(stop.name.as_str()) {
            return Err(NetworkError::DuplicateStopInRoute {
                route: route.name.clone(),
                stop: stop.name.clone(),
            });
        }
    }

    if route.weekday_headway_mins == 0 || route.weekend_headway_mins == Some(0) {
        return Err(NetworkError::ZeroHeadway(route.name.clone()));
    }

    let weekend_ordered = route.weekend_service.is_none_or(|w| w.is_ordered());
    if !route.weekday_service.is_ordered() || !weekend_ordered {
        return Err(NetworkError::InvalidServiceWindow(route.name.clone()));
    }

    Ok(())
}
