use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct PlanetConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub runtime: RuntimeConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    /// Empty when the deployment is unauthenticated.
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Deployment environment label, reported by `GET /os`.
    pub environment: String,
    /// When true, a managed function platform invokes the request handlers
    /// and the process must not bind its own listener.
    pub managed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    pub landing_page: String,
    pub api_docs: String,
}

impl PlanetConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let is_prod = environment == "prod";

        Ok(PlanetConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                username: get_env("MONGODB_USERNAME", Some(""), is_prod)?,
                password: get_env("MONGODB_PASSWORD", Some(""), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("planets_db"), is_prod)?,
            },
            runtime: RuntimeConfig {
                environment,
                managed: env::var("MANAGED_RUNTIME")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .unwrap_or(false),
            },
            assets: AssetConfig {
                landing_page: get_env("LANDING_PAGE_PATH", Some("static/index.html"), is_prod)?,
                api_docs: get_env("API_DOCS_PATH", Some("oas.json"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
