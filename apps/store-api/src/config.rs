//! Configuration for Store API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, server::ServerConfig};
use database::mongodb::{EnvPresence, MongoConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when the connection variables are missing; the API then runs
    /// without a database.
    pub mongodb: Option<MongoConfig>,
    pub presence: EnvPresence,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Missing database variables are tolerated; malformed values are not.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mongodb = match MongoConfig::from_env() {
            Ok(config) => Some(config),
            Err(ConfigError::MissingEnvVar(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            presence: EnvPresence::from_env(),
            server,
            environment,
        })
    }
}
