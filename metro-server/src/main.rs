use std::process::ExitCode;

use metro_server::config::ServerConfig;
use metro_server::logging::init_logger;
use metro_server::network::NetworkGraph;
use metro_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast if the network can't be loaded
    let graph = match NetworkGraph::load(&config.network_path) {
        Ok(graph) => graph,
        Err(e) => {
            error!(error = %e, "Failed to load network");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(graph, config.search);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "Metro journey planner listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /api/stations    - List stations");
    info!("  GET  /api/route       - Plan a route (query string)");
    info!("  POST /route           - Plan a route (journey form)");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
