//! JSON catalog files.
//!
//! Format:
//!
//! ```json
//! {
//!   "routes": [
//!     {
//!       "name": "A/B/AB",
//!       "stops": [{ "name": "Morewood & Forbes", "lat": 40.4449, "lon": -79.9429 }, ...],
//!       "weekday_headway_mins": 10,
//!       "weekend_headway_mins": 15,
//!       "weekday_service": { "start": "7:00 AM", "end": "11:30 PM" },
//!       "weekend_service": { "start": "10:00", "end": "23:30" }
//!     }
//!   ]
//! }
//! ```
//!
//! `weekend_headway_mins` and `weekend_service` may be `null` or omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Coord, Network, RouteDefinition, ServiceWindow, Stop, parse_clock};

use super::error::CatalogError;

/// Top-level catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub routes: Vec<RouteDto>,
}

/// A route as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub name: String,
    pub stops: Vec<StopDto>,
    pub weekday_headway_mins: u32,
    #[serde(default)]
    pub weekend_headway_mins: Option<u32>,
    pub weekday_service: WindowDto,
    #[serde(default)]
    pub weekend_service: Option<WindowDto>,
}

/// A stop as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A service window as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowDto {
    pub start: String,
    pub end: String,
}

impl CatalogFile {
    /// Convert into validated route definitions.
    pub fn into_routes(self) -> Result<Vec<RouteDefinition>, CatalogError> {
        self.routes.into_iter().map(RouteDto::into_route).collect()
    }
}

impl RouteDto {
    fn into_route(self) -> Result<RouteDefinition, CatalogError> {
        let stops = self
            .stops
            .into_iter()
            .map(|s| {
                let coord = Coord::new(s.lat, s.lon).map_err(|source| CatalogError::Coord {
                    stop: s.name.clone(),
                    source,
                })?;
                Ok(Stop::new(s.name, coord))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let weekday_service = self.weekday_service.to_window(&self.name)?;
        let weekend_service = self
            .weekend_service
            .map(|w| w.to_window(&self.name))
            .transpose()?;

        Ok(RouteDefinition {
            name: self.name,
            stops,
            weekday_headway_mins: self.weekday_headway_mins,
            weekend_headway_mins: self.weekend_headway_mins,
            weekday_service,
            weekend_service,
        })
    }
}

impl WindowDto {
    fn to_window(&self, route: &str) -> Result<ServiceWindow, CatalogError> {
        let parse = |s: &str| {
            parse_clock(s).map_err(|source| CatalogError::Time {
                route: route.to_string(),
                source,
            })
        };
        Ok(ServiceWindow::new(parse(&self.start)?, parse(&self.end)?))
    }
}

/// Parse and validate a catalog from a JSON string.
pub fn parse_network(json: &str) -> Result<Network, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Ok(Network::new(file.into_routes()?)?)
}

/// Load and validate a catalog file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_network(&contents)
}
