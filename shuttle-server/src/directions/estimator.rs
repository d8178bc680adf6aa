//! Adapter from the async directions client to the planner's synchronous
//! `DurationEstimator` seam.

use std::sync::Arc;

use tracing::warn;

use crate::cache::CachedDirectionsClient;
use crate::domain::Coord;
use crate::planner::DurationEstimator;

use super::client::TravelMode;

/// Estimates travel time with the directions API for one travel mode.
///
/// Must be called from inside a multi-threaded tokio runtime. Any lookup
/// failure is logged and reported as "unavailable".
#[derive(Clone)]
pub struct DirectionsEstimator {
    client: Arc<CachedDirectionsClient>,
    mode: TravelMode,
}

impl DirectionsEstimator {
    pub fn new(client: Arc<CachedDirectionsClient>, mode: TravelMode) -> Self {
        Self { client, mode }
    }

    /// Walking-time estimator.
    pub fn walking(client: Arc<CachedDirectionsClient>) -> Self {
        Self::new(client, TravelMode::Walking)
    }

    /// Driving-time estimator.
    pub fn driving(client: Arc<CachedDirectionsClient>) -> Self {
        Self::new(client, TravelMode::Driving)
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }
}

impl DurationEstimator for DirectionsEstimator {
    fn estimate_minutes(&self, from: Coord, to: Coord) -> Option<u32> {
        // The planner is synchronous; run the lookup to completion on this worker.
        let result = tokio::task::block_in_place(|| {
            let rt = tokio::runtime::Handle::current();
            rt.block_on(self.client.duration_minutes(from, to, self.mode))
        });

        match result {
            Ok(minutes) => Some(minutes),
            Err(e) => {
                warn!(mode = %self.mode, %from, %to, error = %e, "directions lookup failed, using heuristic");
                None
            }
        }
    }
}

impl std::fmt::Debug for DirectionsEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsEstimator")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
