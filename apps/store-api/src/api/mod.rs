//! API routes module

pub mod diagnostics;
pub mod health;
pub mod orders;
pub mod products;
pub mod root;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes, including `/health` and `/ready`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(health_router(state.config.app))
        .merge(diagnostics::router(state.clone()))
        .merge(products::router(state))
        .merge(orders::router(state))
        .merge(health::router(state.clone()))
}

/// The complete application: API routes, docs and middleware.
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::{DocumentStore, EnvPresence};

    pub fn unavailable_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                mongodb: None,
                presence: EnvPresence::default(),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            store: DocumentStore::unavailable("Database connection variables are not set"),
        }
    }
}
