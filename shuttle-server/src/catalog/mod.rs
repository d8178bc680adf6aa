//! Shuttle network catalogs.
//!
//! The planner works on an in-memory `Network`. This module supplies one:
//! either the built-in campus network or one loaded from a JSON file.

mod cmu;
mod error;
mod file;
mod places;

pub use cmu::{cmu_network, cmu_routes};
pub use error::CatalogError;
pub use file::{CatalogFile, RouteDto, StopDto, WindowDto, load_network, parse_network};
pub use places::{Place, Places, cmu_places};
