//! One-shot batch loader that resets the planet collection to the fixed
//! reference dataset. Not a service: it runs, logs its outcome, and exits.

use planet_service::config::PlanetConfig;
use planet_service::services::{reset_reference_data, PlanetDb};
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("seed-planets", "info");

    let config = PlanetConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let db = PlanetDb::connect(&config.mongodb).await.map_err(|e| {
        tracing::error!("Seeding failed: {}", e);
        std::io::Error::other(format!("Database connection error: {}", e))
    })?;

    let outcome = reset_reference_data(&db).await;

    // Close the connection whether or not seeding completed.
    db.shutdown().await;

    match outcome {
        Ok(()) => {
            tracing::info!("Database seeded successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Seeding failed: {}", e);
            Err(std::io::Error::other(format!("Seeding error: {}", e)))
        }
    }
}
