//! Caching layer for directions lookups.
//!
//! Walking and driving times between two points change slowly, and the
//! planner asks for the same stop-to-stop legs over and over. Coordinates
//! are quantised to five decimal places (about a metre) so that requests
//! for the same spot share an entry. Only successful lookups are cached.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::directions::{DirectionsClient, DirectionsError, TravelMode};
use crate::domain::Coord;

/// Quantisation factor for coordinates in cache keys.
const COORD_SCALE: f64 = 1e5;

/// A coordinate pinned to a fixed grid.
type GridPoint = (i64, i64);

/// Cache key for a lookup: (mode, from, to).
type DurationKey = (TravelMode, GridPoint, GridPoint);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct DirectionsCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for DirectionsCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
        }
    }
}

fn grid_point(coord: Coord) -> GridPoint {
    (
        (coord.lat * COORD_SCALE).round() as i64,
        (coord.lon * COORD_SCALE).round() as i64,
    )
}

fn cache_key(mode: TravelMode, from: Coord, to: Coord) -> DurationKey {
    (mode, grid_point(from), grid_point(to))
}

/// Directions client with caching.
///
/// Wraps a `DirectionsClient` and caches travel times in minutes.
pub struct CachedDirectionsClient {
    client: DirectionsClient,
    durations: MokaCache<DurationKey, u32>,
}

impl CachedDirectionsClient {
    /// Create a new cached client.
    pub fn new(client: DirectionsClient, cache_config: &DirectionsCacheConfig) -> Self {
        let durations = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { client, durations }
    }

    /// Travel time in minutes, using the cache if available.
    pub async fn duration_minutes(
        &self,
        from: Coord,
        to: Coord,
        mode: TravelMode,
    ) -> Result<u32, DirectionsError> {
        let key = cache_key(mode, from, to);

        if let Some(cached) = self.durations.get(&key).await {
            return Ok(cached);
        }

        let minutes = self.client.duration_minutes(from, to, mode).await?;
        self.durations.insert(key, minutes).await;

        Ok(minutes)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.durations.entry_count()
    }
}
