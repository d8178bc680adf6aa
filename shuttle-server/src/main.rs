use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shuttle_server::cache::{CachedDirectionsClient, DirectionsCacheConfig};
use shuttle_server::catalog::{cmu_network, cmu_places, load_network};
use shuttle_server::config::ServerConfig;
use shuttle_server::directions::{DirectionsClient, DirectionsConfig};
use shuttle_server::planner::PlannerConfig;
use shuttle_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "shuttle_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the network (custom catalog or built-in)
    let network = match &config.network_path {
        Some(path) => match load_network(path) {
            Ok(network) => {
                info!(path = %path.display(), "loaded network catalog");
                network
            }
            Err(e) => {
                error!("failed to load network catalog: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => cmu_network(),
    };
    info!(
        routes = network.routes().len(),
        stops = network.stops().len(),
        "shuttle network ready"
    );

    let mut state = AppState::new(network, PlannerConfig::default(), cmu_places());

    // Optional directions API for walking and driving estimates
    match &config.api_key {
        Some(key) => {
            let directions_config =
                DirectionsConfig::new(key).with_timeout(config.directions_timeout_secs);
            match DirectionsClient::new(directions_config) {
                Ok(client) => {
                    let cache_config = DirectionsCacheConfig {
                        ttl: config.cache_ttl,
                        ..DirectionsCacheConfig::default()
                    };
                    state = state.with_directions(CachedDirectionsClient::new(client, &cache_config));
                    info!("using directions API for duration estimates");
                }
                Err(e) => warn!("directions client unavailable, using heuristics: {e}"),
            }
        }
        None => info!("no directions API key configured, using heuristics"),
    }

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.bind_addr);
            return ExitCode::FAILURE;
        }
    };

    info!("Shuttle Trip Planner listening on http://{}", config.bind_addr);
    info!("  GET  /health                - Health check");
    info!("  GET  /shuttle/routes        - Routes and schedules");
    info!("  GET  /shuttle/places        - Named places");
    info!("  GET  /shuttle/stops/nearest - Nearest stop to lat/lon");
    info!("  POST /shuttle/plan          - Plan a trip");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
