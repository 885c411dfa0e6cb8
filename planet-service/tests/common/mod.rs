use planet_service::config::PlanetConfig;
use planet_service::services::PlanetDb;
use planet_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: PlanetDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn the service on a random port against a fresh database,
    /// applying `customize` to the configuration first.
    pub async fn spawn_with(customize: impl FnOnce(&mut PlanetConfig)) -> Self {
        let db_name = format!("planet_test_{}", Uuid::new_v4());

        let mut config = PlanetConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections by polling the liveness
        // probe.
        let client = reqwest::Client::new();
        let live_url = format!("{}/live", address);
        for _ in 0..50 {
            if client.get(&live_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Cleanup test resources (drop the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
