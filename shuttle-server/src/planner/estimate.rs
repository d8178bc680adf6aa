//! Optional external duration estimators.
//!
//! The planner never depends on an estimator: each one may answer with a
//! number of minutes or decline with `None`, in which case the distance
//! heuristics are used instead.

use crate::domain::Coord;

/// A source of travel-time estimates between two coordinates.
///
/// Implementations must not panic on failure. Timeouts, network errors and
/// malformed responses are all reported as `None` ("unavailable").
pub trait DurationEstimator {
    /// Estimated travel time from `from` to `to`, in whole minutes.
    fn estimate_minutes(&self, from: Coord, to: Coord) -> Option<u32>;
}

impl<F> DurationEstimator for F
where
    F: Fn(Coord, Coord) -> Option<u32>,
{
    fn estimate_minutes(&self, from: Coord, to: Coord) -> Option<u32> {
        self(from, to)
    }
}

/// The estimators available to one planning call.
#[derive(Clone, Copy, Default)]
pub struct Estimators<'a> {
    /// Walking time between a point and a stop.
    pub walk: Option<&'a dyn DurationEstimator>,
    /// Free-flow driving time between two stops.
    pub drive: Option<&'a dyn DurationEstimator>,
}

impl<'a> Estimators<'a> {
    /// No external estimators: heuristics only.
    pub fn none() -> Self {
        Self::default()
    }

    /// Use the given walking and driving estimators.
    pub fn new(
        walk: Option<&'a dyn DurationEstimator>,
        drive: Option<&'a dyn DurationEstimator>,
    ) -> Self {
        Self { walk, drive }
    }

    /// Ask the walking estimator, if any.
    pub fn walk_minutes(&self, from: Coord, to: Coord) -> Option<u32> {
        self.walk.and_then(|e| e.estimate_minutes(from, to))
    }

    /// Ask the driving estimator, if any.
    pub fn drive_minutes(&self, from: Coord, to: Coord) -> Option<u32> {
        self.drive.and_then(|e| e.estimate_minutes(from, to))
    }

    /// Returns true if neither estimator is present.
    pub fn is_empty(&self) -> bool {
        self.walk.is_none() && self.drive.is_none()
    }
}

impl std::fmt::Debug for Estimators<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimators")
            .field("walk", &self.walk.is_some())
            .field("drive", &self.drive.is_some())
            .finish()
    }
}
