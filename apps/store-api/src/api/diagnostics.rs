//! Connectivity report at `/test`
//!
//! Always answers 200; problems are described in the body instead.

use axum::{Json, Router, extract::State, routing::get};
use database::mongodb::{DocumentStore, EnvPresence};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsReport {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    #[schema(example = "✅ Set")]
    pub database_url: String,
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// At most ten collection names
    pub collections: Vec<String>,
}

fn set_or_not(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_string()
}

/// Build the report for `store`.
pub async fn report(store: &DocumentStore, presence: EnvPresence) -> DiagnosticsReport {
    let (database, connection_status, collections) = if store.is_available() {
        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                ("✅ Connected & Working".to_string(), "Connected", names)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Listing collections failed");
                let short: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                (format!("⚠️  Connected but Error: {short}"), "Connected", vec![])
            }
        }
    } else {
        (
            "⚠️  Available but not initialized".to_string(),
            "Not Connected",
            vec![],
        )
    };

    DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_or_not(presence.url),
        database_name: set_or_not(presence.database),
        connection_status: connection_status.to_string(),
        collections,
    }
}

/// Report backend and database connectivity
#[utoipa::path(
    get,
    path = "/test",
    tag = "Service",
    responses((status = 200, description = "Connectivity report", body = DiagnosticsReport))
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(report(&state.store, state.config.presence).await)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(diagnostics))
        .with_state(state)
}
