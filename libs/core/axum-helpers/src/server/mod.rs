//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with OpenAPI documentation
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//! use std::time::Duration;
//!
//! // Health endpoints go inside the router so they get the same middleware
//! let app = create_router::<ApiDoc>(api_routes.merge(health_router(app_info!())));
//!
//! // Start server with graceful shutdown
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
