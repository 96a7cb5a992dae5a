use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error, warn};

use crate::config::{ConfigOverrides, GatewayConfig};
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(overrides: &ConfigOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("AQI forecast gateway starting up");

    let config = match GatewayConfig::load(overrides) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    debug!("Upstream URL: {}", config.upstream_url);
    debug!("Static directory: {}", config.static_dir.display());

    if !config.index_file().is_file() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            config.static_dir.display()
        );
    }

    let bind_address = config.bind_address.clone();

    // Initialize application state
    trace!("Initializing application state");
    let state = AppState::new(config)?;

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("AQI forecast page available on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
