use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{create_permissive_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tokio::task::JoinHandle;
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - Swagger UI at `/docs`, backed by the document at `/openapi.json`
/// - ReDoc at `/redoc`
/// - API routes merged at the root
/// - Common middleware (tracing, security headers, permissive CORS, compression)
/// - JSON 404 and 405 fallbacks
///
/// Health endpoints are not included; merge `health_router()` and any
/// readiness route into `apis` so the middleware covers them.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_permissive_cors_layer())
        .layer(CompressionLayer::new())
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// `cleanup` runs once the server stops, whether it stopped on a signal or on
/// an error.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration
/// * `shutdown_timeout` - Maximum time to wait for `cleanup`
/// * `cleanup` - Async cleanup run once the server stops
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = spawn_cleanup(&coordinator, shutdown_timeout, cleanup);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator.clone()))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Releases the cleanup task when serve returned without a signal.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

/// Run `cleanup`, bounded by `timeout`, once `coordinator` signals shutdown.
fn spawn_cleanup<F>(
    coordinator: &ShutdownCoordinator,
    timeout: Duration,
    cleanup: F,
) -> JoinHandle<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let mut rx = coordinator.subscribe();
    let coordinator = coordinator.clone();

    tokio::spawn(async move {
        if !coordinator.is_shutting_down() {
            rx.recv().await.ok();
        }

        info!("Starting cleanup tasks (timeout: {:?})", timeout);
        match tokio::time::timeout(timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!("Cleanup exceeded timeout of {:?}, forcing shutdown", timeout);
            }
        }
    })
}
