//! Configuration for Products API

use axum_helpers::AuthConfig;
use core_config::{app_info, server::ServerConfig, storage::StorageConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let storage = StorageConfig::from_env()?;
        let auth = AuthConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            storage,
            auth,
            environment,
        })
    }
}
