//! Named location presets.
//!
//! Lets callers refer to well-known campus locations by name instead of
//! supplying raw coordinates.

use crate::domain::Coord;

/// A named location.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub coord: Coord,
}

/// A lookup table of named locations.
#[derive(Debug, Clone, Default)]
pub struct Places {
    places: Vec<Place>,
}

impl Places {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place. Lookups return the first place with a matching name.
    pub fn add(&mut self, name: &str, address: &str, coord: Coord) {
        self.places.push(Place {
            name: name.to_string(),
            address: address.to_string(),
            coord,
        });
    }

    /// Find a place by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&Place> {
        let wanted = name.trim();
        self.places
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
    }

    /// All places, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    /// Returns the number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns true if there are no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Campus location presets.
pub fn cmu_places() -> Places {
    let mut places = Places::new();
    places.add(
        "Main Campus",
        "5000 Forbes Avenue, Pittsburgh, PA 15213",
        Coord::new_unchecked(40.4433, -79.9436),
    );
    places.add(
        "Morewood Parking",
        "Morewood Avenue, Pittsburgh, PA 15213",
        Coord::new_unchecked(40.4458, -79.9461),
    );
    places.add(
        "PTC",
        "700 Technology Drive, Pittsburgh, PA 15219",
        Coord::new_unchecked(40.4542, -79.9196),
    );
    places.add(
        "Shadyside",
        "5500 Centre Avenue, Pittsburgh, PA 15232",
        Coord::new_unchecked(40.4529, -79.9325),
    );
    places.add(
        "Squirrel Hill",
        "Forbes Avenue & Murray Avenue, Pittsburgh, PA 15217",
        Coord::new_unchecked(40.4347, -79.9234),
    );
    places.add(
        "Bakery Square",
        "6425 Penn Avenue, Pittsburgh, PA 15206",
        Coord::new_unchecked(40.4633, -79.9214),
    );
    places
}
