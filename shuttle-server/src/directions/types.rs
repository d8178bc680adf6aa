//! Google Directions API response DTOs.
//!
//! Only the fields needed to read a trip duration are mapped. Everything
//! else in the response is ignored.

use serde::Deserialize;

/// Top-level Directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    pub status: String,

    /// Present when the API rejects a request.
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One suggested route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// One leg of a route (a single origin-destination pair without waypoints).
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub duration: Measure,
}

/// A measured quantity. The API's display text is not mapped.
#[derive(Debug, Clone, Deserialize)]
pub struct Measure {
    /// Seconds.
    pub value: u64,
}

impl DirectionsResponse {
    /// Returns true if the API reported success.
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }

    /// Duration of the first leg of the first route, in seconds.
    pub fn first_leg_seconds(&self) -> Option<u64> {
        self.routes
            .first()
            .and_then(|r| r.legs.first())
            .map(|leg| leg.duration.value)
    }
}
