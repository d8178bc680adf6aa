//! Shuttle stop type.

use super::Coord;

/// A named, geolocated boarding/alighting point.
///
/// Stops are identified by name: two stops with the same name are the
/// same stop, even if they appear in different routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coord: Coord,
}

impl Stop {
    /// Create a stop from a name and coordinate.
    pub fn new(name: impl Into<String>, coord: Coord) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }

    /// Returns true if this stop has the given name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// Straight-line distance from this stop to a coordinate, in miles.
    pub fn miles_to(&self, coord: &Coord) -> f64 {
        self.coord.miles_to(coord)
    }
}
