//! Store API - catalog and checkout REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{DocumentStore, open_store};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Open the document store, or fall back to an unavailable one.
///
/// The API starts either way; data routes answer 503 until restarted with a
/// reachable database.
async fn open_document_store(config: &Config) -> DocumentStore {
    let Some(mongodb) = &config.mongodb else {
        warn!("DATABASE_URL / DATABASE_NAME not set, starting without a database");
        return DocumentStore::unavailable("Database connection variables are not set");
    };

    info!("Connecting to MongoDB at {}", mongodb.redacted_url());

    match open_store(mongodb).await {
        Ok(store) => {
            info!(
                "Successfully connected to MongoDB database: {}",
                mongodb.database()
            );
            store
        }
        Err(e) => {
            warn!(error = %e, "MongoDB connection failed, starting without a database");
            DocumentStore::unavailable(e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = open_document_store(&config).await;
    let state = AppState { config, store };

    let app = api::app(&state);
    let server = state.config.server.clone();

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, server.port
    );

    create_production_app(
        app,
        &server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: releasing MongoDB handle");
            drop(state.store);
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Store API shutdown complete");
    Ok(())
}
