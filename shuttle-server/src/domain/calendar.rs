//! Service calendar: which routes run when, and how often.
//!
//! Day type is decided by the local calendar day of the timestamp:
//! Saturday and Sunday are weekend, everything else is weekday.

use chrono::{Datelike, NaiveDateTime, Weekday};

use super::RouteDefinition;

/// Whether a timestamp falls on a weekday or at the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Day type of a timestamp.
    pub fn of(when: NaiveDateTime) -> Self {
        if is_weekend(when) {
            DayType::Weekend
        } else {
            DayType::Weekday
        }
    }
}

/// Returns true on Saturday or Sunday.
pub fn is_weekend(when: NaiveDateTime) -> bool {
    matches!(when.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if the route operates at `when`.
///
/// A route with no weekend window never operates at the weekend.
pub fn service_is_active(route: &RouteDefinition, when: NaiveDateTime) -> bool {
    let window = match DayType::of(when) {
        DayType::Weekday => Some(route.weekday_service),
        DayType::Weekend => route.weekend_service,
    };
    window.is_some_and(|w| w.contains(when.time()))
}

/// Headway in force at `when`, or `None` if the route has no service that day.
pub fn headway_minutes(route: &RouteDefinition, when: NaiveDateTime) -> Option<u32> {
    match DayType::of(when) {
        DayType::Weekday => Some(route.weekday_headway_mins),
        DayType::Weekend => route.weekend_headway_mins,
    }
}
