//! Web layer for the shuttle trip planner.
//!
//! Provides JSON endpoints for browsing the network and planning trips.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
