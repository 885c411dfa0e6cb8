use planet_service::config::PlanetConfig;
use planet_service::startup::Application;

#[tokio::test]
async fn unreachable_store_prevents_listening() {
    let mut config = PlanetConfig::load().expect("Failed to load configuration");
    config.common.port = 0;
    // Discard port with aggressive timeouts so the build fails fast.
    config.mongodb.uri =
        "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=500&connectTimeoutMS=500".to_string();

    let result = Application::build(config).await;

    assert!(
        result.is_err(),
        "build must fail before a listener is bound when the store is unreachable"
    );
}
