//! Data transfer objects for web requests and responses.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::catalog::Place;
use crate::domain::{
    Itinerary, PlanFailure, RouteDefinition, ServiceWindow, Step, Stop, TripPlan, TripTotals,
    format_duration_mins,
};

/// A location in a request: raw coordinates or a named preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    Coords { lat: f64, lon: f64 },
    Place { place: String },
}

/// Request to plan a shuttle trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub origin: LocationInput,
    pub destination: LocationInput,

    /// Departure time as `YYYY-MM-DDTHH:MM[:SS]` (defaults to now)
    pub when: Option<String>,
}

/// Parse a request timestamp.
pub fn parse_when(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Response for trip planning.
///
/// Infeasible trips are reported with `success: false` and a `reason`.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    /// Stop nearest the origin
    pub origin_stop: String,

    /// Stop nearest the destination
    pub dest_stop: String,

    /// Itinerary steps (empty on failure)
    pub steps: Vec<StepResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalsResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<TimesResult>,

    /// Whether any duration came from the directions API
    pub uses_external_estimates: bool,
}

/// A step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepResult {
    Walk {
        from: String,
        to: String,
        minutes: u32,
    },
    Wait {
        at: String,
        route: String,
        minutes: u32,
    },
    Shuttle {
        route: String,
        from: String,
        to: String,
        minutes: u32,
        miles: f64,
    },
}

/// Trip totals in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsResult {
    pub minutes: u32,
    pub walk_minutes: u32,
    pub wait_minutes: u32,
    pub in_vehicle_minutes: u32,

    /// Total duration for display, e.g. "1 hour 5 mins"
    pub display: String,
}

/// Estimated clock times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesResult {
    pub board_time: String,
    pub arrival_time: String,
}

impl PlanTripResponse {
    pub fn from_plan(plan: &TripPlan) -> Self {
        match plan {
            TripPlan::Planned(itinerary) => Self::from_itinerary(itinerary),
            TripPlan::Infeasible(failure) => Self::from_failure(failure),
        }
    }

    fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            success: true,
            reason: None,
            route_name: Some(itinerary.route_name.clone()),
            origin_stop: itinerary.origin_stop.clone(),
            dest_stop: itinerary.dest_stop.clone(),
            steps: itinerary.steps.iter().map(StepResult::from_step).collect(),
            totals: Some(TotalsResult::from_totals(&itinerary.totals)),
            times: Some(TimesResult {
                board_time: itinerary.board_clock(),
                arrival_time: itinerary.arrival_clock(),
            }),
            uses_external_estimates: itinerary.used_external_estimates,
        }
    }

    fn from_failure(failure: &PlanFailure) -> Self {
        Self {
            success: false,
            reason: Some(failure.to_string()),
            route_name: failure.route_name().map(str::to_string),
            origin_stop: failure.origin_stop().to_string(),
            dest_stop: failure.dest_stop().to_string(),
            steps: Vec::new(),
            totals: None,
            times: None,
            uses_external_estimates: false,
        }
    }
}

impl StepResult {
    pub fn from_step(step: &Step) -> Self {
        match step {
            Step::Walk { from, to, minutes } => StepResult::Walk {
                from: from.clone(),
                to: to.clone(),
                minutes: *minutes,
            },
            Step::Wait { at, route, minutes } => StepResult::Wait {
                at: at.clone(),
                route: route.clone(),
                minutes: *minutes,
            },
            Step::Shuttle {
                route,
                from,
                to,
                minutes,
                miles,
            } => StepResult::Shuttle {
                route: route.clone(),
                from: from.clone(),
                to: to.clone(),
                minutes: *minutes,
                miles: *miles,
            },
        }
    }
}

impl TotalsResult {
    pub fn from_totals(totals: &TripTotals) -> Self {
        Self {
            minutes: totals.minutes,
            walk_minutes: totals.walk_minutes,
            wait_minutes: totals.wait_minutes,
            in_vehicle_minutes: totals.in_vehicle_minutes,
            display: format_duration_mins(totals.minutes),
        }
    }
}

/// A stop with its coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            name: stop.name.clone(),
            lat: stop.coord.lat,
            lon: stop.coord.lon,
        }
    }
}

/// A daily service window as clock strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowResult {
    pub start: String,
    pub end: String,
}

impl WindowResult {
    pub fn from_window(window: &ServiceWindow) -> Self {
        Self {
            start: format_time(window.start),
            end: format_time(window.end),
        }
    }
}

/// A route in the network listing.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    pub name: String,
    pub stops: Vec<StopResult>,
    pub weekday_headway_mins: u32,
    pub weekend_headway_mins: Option<u32>,
    pub weekday_service: WindowResult,
    pub weekend_service: Option<WindowResult>,
}

impl RouteResult {
    pub fn from_route(route: &RouteDefinition) -> Self {
        Self {
            name: route.name.clone(),
            stops: route.stops.iter().map(StopResult::from_stop).collect(),
            weekday_headway_mins: route.weekday_headway_mins,
            weekend_headway_mins: route.weekend_headway_mins,
            weekday_service: WindowResult::from_window(&route.weekday_service),
            weekend_service: route.weekend_service.as_ref().map(WindowResult::from_window),
        }
    }
}

/// Response listing all routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// A named place preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

impl PlaceResult {
    pub fn from_place(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            address: place.address.clone(),
            lat: place.coord.lat,
            lon: place.coord.lon,
        }
    }
}

/// Response listing place presets.
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub places: Vec<PlaceResult>,
}

/// Query for the nearest stop.
#[derive(Debug, Deserialize)]
pub struct NearestStopQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Response for the nearest stop.
#[derive(Debug, Serialize)]
pub struct NearestStopResponse {
    pub stop: StopResult,

    /// Straight-line distance to the stop
    pub miles: f64,

    /// Routes serving the stop
    pub routes: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
