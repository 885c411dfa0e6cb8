use crate::models::Planet;
use crate::services::record_planet_lookup;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PlanetLookup {
    pub id: i64,
}

/// Look up a single planet by its id.
///
/// 200 with the record when found, 404 when no record matches, 500 with an
/// opaque body when the query itself fails (detail stays in the logs).
#[tracing::instrument(skip(state))]
pub async fn lookup_planet(
    State(state): State<AppState>,
    Json(request): Json<PlanetLookup>,
) -> Result<Json<Planet>, AppError> {
    let planet = state.db.find_by_id(request.id).await?;

    match planet {
        Some(planet) => {
            record_planet_lookup("found");
            Ok(Json(planet))
        }
        None => {
            record_planet_lookup("missing");
            Err(AppError::NotFound(anyhow::anyhow!("Planet not found")))
        }
    }
}
