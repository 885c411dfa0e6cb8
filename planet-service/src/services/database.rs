use crate::config::MongoConfig;
use crate::models::Planet;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, Credential, FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

/// Shared handle to the planet collection.
///
/// One client per process; clones share the underlying connection pool and
/// are injected into handlers through application state.
#[derive(Clone)]
pub struct PlanetDb {
    client: MongoClient,
    db: Database,
}

impl PlanetDb {
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(uri = %config.uri, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB URI {}: {}", config.uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        if !config.username.is_empty() {
            options.credential = Some(
                Credential::builder()
                    .username(config.username.clone())
                    .password(config.password.clone())
                    .build(),
            );
        }

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(&config.database);

        let handle = Self { client, db };

        // The driver connects lazily; ping now so an unreachable store fails
        // startup instead of the first request.
        handle.health_check().await?;
        tracing::info!(database = %config.database, "Successfully connected to MongoDB database");
        Ok(handle)
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for planet-service");

        // Non-unique: duplicate ids are tolerated and lookups take the
        // first match.
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().name("id_idx".to_string()).build())
            .build();

        self.planets().create_index(id_index, None).await.map_err(|e| {
            tracing::error!("Failed to create id index: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn planets(&self) -> Collection<Planet> {
        self.db.collection("planets")
    }

    /// Look up a planet by its `id` field. Returns the first match when
    /// duplicates exist.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError> {
        self.planets()
            .find_one(doc! { "id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find planet {}: {}", id, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self
            .planets()
            .delete_many(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to clear planet collection: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(result.deleted_count)
    }

    pub async fn insert_planets(&self, planets: &[Planet]) -> Result<(), AppError> {
        self.planets()
            .insert_many(planets, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert planets: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.planets()
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count planets: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    /// All planets ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Planet>, AppError> {
        let find_options = FindOptions::builder().sort(doc! { "id": 1 }).build();

        let cursor = self
            .planets()
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list planets: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect planets: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    /// Close the underlying client. Used by the seed loader's final step;
    /// the long-running service relies on process teardown instead.
    pub async fn shutdown(self) {
        let Self { client, db } = self;
        drop(db);
        client.shutdown().await;
    }
}
