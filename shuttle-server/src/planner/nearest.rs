//! Nearest-stop lookup.
//!
//! The network is small (tens of stops), so a linear scan over the
//! de-duplicated stop list is exact and fast enough.

use crate::domain::{Coord, Network, Stop};

/// A stop resolved for a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStop<'n> {
    pub stop: &'n Stop,
    /// Straight-line distance from the query point, in miles.
    pub miles: f64,
}

/// Find the stop closest to `coord`.
///
/// Ties go to the stop that appears first in the catalog.
pub fn find_nearest_stop(network: &Network, coord: Coord) -> NearestStop<'_> {
    let mut stops = network.stops().iter();
    // Network::new rejects catalogs without stops
    let first = stops.next().expect("network has at least one stop");

    stops.fold(
        NearestStop {
            stop: first,
            miles: first.miles_to(&coord),
        },
        |best, stop| {
            let miles = stop.miles_to(&coord);
            if miles < best.miles {
                NearestStop { stop, miles }
            } else {
                best
            }
        },
    )
}
