//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::catalog::Places;
use crate::domain::Network;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Shuttle network
    pub network: Arc<Network>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,

    /// Named location presets
    pub places: Arc<Places>,

    /// Cached directions client, if an API key is configured
    pub directions: Option<Arc<CachedDirectionsClient>>,
}

impl AppState {
    /// Create a new app state without external estimators.
    pub fn new(network: Network, config: PlannerConfig, places: Places) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            places: Arc::new(places),
            directions: None,
        }
    }

    /// Use the directions API for walking and driving estimates.
    pub fn with_directions(mut self, directions: CachedDirectionsClient) -> Self {
        self.directions = Some(Arc::new(directions));
        self
    }
}
