use crate::config::PlanetConfig;
use crate::handlers;
use crate::services::{get_metrics, PlanetDb};
use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::metrics_middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: PlanetConfig,
    pub db: PlanetDb,
}

impl AppState {
    /// Connect the document store for the given configuration.
    pub async fn connect(config: PlanetConfig) -> Result<Self, AppError> {
        let db = PlanetDb::connect(&config.mongodb).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        Ok(Self { config, db })
    }
}

async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

/// Build the full route surface for the given state.
///
/// Public so a managed function platform can mount the handlers behind its
/// own adapter instead of the bundled listener.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/planet", post(handlers::lookup_planet))
        .route("/", get(handlers::landing_page))
        .route("/api-docs", get(handlers::api_docs))
        .route("/os", get(handlers::os_info))
        .route("/live", get(handlers::live))
        .route("/ready", get(handlers::ready))
        .route("/metrics", get(metrics_endpoint))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application: connect the store first, bind the listener
    /// after, so no listener is ever active without an established
    /// connection.
    pub async fn build(config: PlanetConfig) -> Result<Self, AppError> {
        let state = AppState::connect(config).await?;

        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &PlanetDb {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
