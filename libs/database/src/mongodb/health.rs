use std::time::Instant;

use super::DocumentStore;

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check MongoDB health with a `ping` command, timing the round trip.
///
/// An unavailable store is never healthy.
pub async fn check_health_detailed(store: &DocumentStore) -> HealthStatus {
    let start = Instant::now();
    let result = store.ping().await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_store_is_unhealthy() {
        let store = DocumentStore::unavailable("no configuration");
        let status = check_health_detailed(&store).await;
        assert!(!status.healthy);
        assert!(status.message.unwrap().contains("no configuration"));
    }
}
