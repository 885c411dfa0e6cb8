use crate::models::reference_planets;
use crate::services::PlanetDb;
use service_core::error::AppError;

/// Reset the planet collection to the fixed reference dataset.
///
/// Clears the collection, then inserts the eight reference records, so
/// sequential re-runs converge on the same state. A failure between the
/// delete and the insert leaves the collection empty until the next run.
pub async fn reset_reference_data(db: &PlanetDb) -> Result<(), AppError> {
    tracing::info!("Clearing existing planet data");
    let deleted = db.delete_all().await?;
    tracing::info!(deleted, "Planet collection cleared");

    let planets = reference_planets();
    tracing::info!(count = planets.len(), "Inserting planet data");
    db.insert_planets(&planets).await?;
    tracing::info!("Planet collection seeded");

    Ok(())
}
