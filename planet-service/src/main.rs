use planet_service::config::PlanetConfig;
use planet_service::services::init_metrics;
use planet_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics();

    // Initialize tracing
    init_tracing("planet-service", "info");

    let config = PlanetConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    if config.runtime.managed {
        // The platform invokes the router through the library adapter
        // (`startup::build_router`); binding a listener here would conflict
        // with it.
        tracing::info!("Managed runtime configured; not starting a network listener");
        return Ok(());
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start planet-service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
