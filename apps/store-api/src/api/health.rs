//! Readiness endpoint

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

/// Report whether the database answers a ping
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Service",
    responses(
        (status = 200, description = "All dependencies reachable"),
        (status = 503, description = "Database unreachable or not configured")
    )
)]
pub async fn ready(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let status = check_health_detailed(&state.store).await;
            tracing::debug!(
                healthy = status.healthy,
                response_time_ms = status.response_time_ms,
                "Database health checked"
            );
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "unhealthy".to_string()))
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
