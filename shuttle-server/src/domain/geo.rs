//! Geographic coordinates and straight-line distance heuristics.

use std::fmt;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Assumed walking speed in miles per hour.
pub const WALKING_MPH: f64 = 3.0;

/// Assumed average shuttle speed in miles per hour, stops and signals included.
pub const SHUTTLE_MPH: f64 = 12.0;

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoord {
    reason: &'static str,
}

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::Coord;
///
/// let campus = Coord::new(40.4449, -79.9429).unwrap();
/// assert_eq!(campus.lat, 40.4449);
///
/// assert!(Coord::new(91.0, 0.0).is_err());
/// assert!(Coord::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoord> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoord {
                reason: "latitude and longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoord {
                reason: "latitude must be between -90 and 90",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoord {
                reason: "longitude must be between -180 and 180",
            });
        }
        Ok(Self { lat, lon })
    }

    /// Create a coordinate without range checks.
    ///
    /// Intended for compile-time catalogs whose values are known to be valid.
    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another coordinate, in miles.
    pub fn miles_to(&self, other: &Coord) -> f64 {
        great_circle_distance_miles(self.lat, self.lon, other.lat, other.lon)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Haversine distance between two points, in miles.
///
/// Symmetric and non-negative; zero for identical inputs.
pub fn great_circle_distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Minutes to cover `miles` at `mph`, rounded half-to-even and floored at `min_minutes`.
pub fn minutes_at_speed(miles: f64, mph: f64, min_minutes: u32) -> u32 {
    let minutes = (miles / mph * 60.0).round_ties_even();
    if minutes.is_finite() && minutes > min_minutes as f64 {
        minutes as u32
    } else {
        min_minutes
    }
}

/// Walking time for a straight-line distance at 3 mph, never less than one minute.
pub fn walking_minutes_heuristic(miles: f64) -> u32 {
    minutes_at_speed(miles, WALKING_MPH, 1)
}
