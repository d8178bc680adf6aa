//! Route definitions and service windows.

use chrono::{NaiveTime, Timelike};

use super::Stop;

/// A daily operating window, inclusive at both ends.
///
/// Comparison is done at minute resolution: a window ending at 23:30
/// still covers 23:30:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ServiceWindow {
    /// Create a window from its start and end times.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Create a window from hour/minute pairs.
    ///
    /// Returns `None` if either pair is not a valid time of day.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            end: NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        })
    }

    /// Returns true if the start is not after the end.
    pub fn is_ordered(&self) -> bool {
        minutes_since_midnight(self.start) <= minutes_since_midnight(self.end)
    }

    /// Returns true if `time` falls within the window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let m = minutes_since_midnight(time);
        minutes_since_midnight(self.start) <= m && m <= minutes_since_midnight(self.end)
    }
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// A shuttle route: an ordered stop sequence run at a fixed headway.
///
/// The stop order is one canonical direction of travel. Construct routes
/// freely, but only a [`Network`](super::Network) guarantees the invariants
/// (at least two stops, no duplicates, positive headways).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    pub name: String,
    pub stops: Vec<Stop>,
    pub weekday_headway_mins: u32,
    /// `None` means no weekend service.
    pub weekend_headway_mins: Option<u32>,
    pub weekday_service: ServiceWindow,
    /// `None` means no weekend service.
    pub weekend_service: Option<ServiceWindow>,
}

impl RouteDefinition {
    /// Position of the named stop in the route, if it is served.
    pub fn position_of(&self, stop_name: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.is_named(stop_name))
    }

    /// Returns true if the route serves the named stop.
    pub fn serves(&self, stop_name: &str) -> bool {
        self.position_of(stop_name).is_some()
    }

    /// Sum of straight-line hops between the stops at positions `a` and `b`.
    ///
    /// Direction-agnostic: the span always runs from the lower to the higher
    /// index. Indices past the end of the route are clamped.
    pub fn miles_between(&self, a: usize, b: usize) -> f64 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let hi = hi.min(self.stops.len().saturating_sub(1));
        if lo >= hi {
            return 0.0;
        }
        self.stops[lo..=hi]
            .windows(2)
            .map(|pair| pair[0].coord.miles_to(&pair[1].coord))
            .sum()
    }

    /// Returns true if the route has any weekend service window.
    pub fn runs_weekends(&self) -> bool {
        self.weekend_service.is_some()
    }
}
