use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::{DocumentStore, MongoConfig};

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect using a MongoConfig
///
/// Applies the pool, timeout and app-name settings, then verifies the
/// connection with a single `listDatabases` round trip. There is no retry: a
/// failure is returned to the caller immediately.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    // Verify connection
    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect and wrap the configured database in a [`DocumentStore`].
pub async fn open_store(config: &MongoConfig) -> Result<DocumentStore, MongoError> {
    let client = connect_from_config(config).await?;
    Ok(DocumentStore::connected(client.database(config.database())))
}
