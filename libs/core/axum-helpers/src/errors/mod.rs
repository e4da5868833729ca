pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::mongodb::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error response carries a human-readable `detail`. Validation failures
/// add an `errors` object keyed by field.
///
/// # JSON Example
///
/// ```json
/// {
///   "detail": "Request validation failed",
///   "errors": {
///     "customer_email": [{ "code": "email", "message": null, "params": { "value": "nope" } }]
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            errors: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// HTTP status this error maps to.
    ///
    /// A body that is not valid JSON, or JSON of the wrong shape, is a 422
    /// like any other invalid payload.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(
                JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_),
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (detail, errors, code) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.body_text(), None, ErrorCode::JsonExtraction)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::Value::Null)),
                    ErrorCode::ValidationError,
                )
            }
            AppError::InvalidId(msg) => {
                tracing::info!(error_code = ErrorCode::InvalidObjectId.code(), "Invalid id: {}", msg);
                (msg, None, ErrorCode::InvalidObjectId)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (msg, None, ErrorCode::NotFound)
            }
            AppError::DatabaseUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::DatabaseUnavailable.code(),
                    "Database unavailable: {}",
                    msg
                );
                (
                    ErrorCode::DatabaseUnavailable.default_message().to_string(),
                    None,
                    ErrorCode::DatabaseUnavailable,
                )
            }
            AppError::Database(msg) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    msg
                );
                (
                    ErrorCode::DatabaseError.default_message().to_string(),
                    None,
                    ErrorCode::DatabaseError,
                )
            }
        };

        tracing::debug!(error = %code, status = status.as_u16(), "Returning error response");

        (status, Json(ErrorResponse { detail, errors })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => AppError::DatabaseUnavailable(reason),
            StoreError::InvalidId(raw) => AppError::InvalidId(format!("Invalid id: {}", raw)),
            StoreError::Mongo(e) => AppError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(range(min = 0.0))]
        price: f64,
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_detail() {
        let response = AppError::NotFound("Product not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.detail, "Product not found");
        assert!(body.errors.is_none());
    }

    #[tokio::test]
    async fn test_invalid_id_maps_to_400() {
        let response = AppError::InvalidId("Invalid product id".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.detail, "Invalid product id");
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_422_with_field_errors() {
        let errors = Sample { price: -1.0 }.validate().unwrap_err();
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await;
        assert_eq!(body.detail, "Request validation failed");
        assert!(body.errors.unwrap().get("price").is_some());
    }

    #[tokio::test]
    async fn test_unparsable_json_body_maps_to_422() {
        let rejection = Json::<serde_json::Value>::from_bytes(br#"{"customer_name":"#).unwrap_err();
        assert!(matches!(rejection, JsonRejection::JsonSyntaxError(_)));

        let response = AppError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body_of(response).await.detail.is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_convert_to_matching_status() {
        let unavailable = AppError::from(StoreError::Unavailable("DATABASE_URL not set".into()));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let invalid = AppError::from(StoreError::InvalidId("abc".into()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(invalid.into_response()).await.detail, "Invalid id: abc");
    }

    #[tokio::test]
    async fn test_database_errors_hide_internal_message() {
        let response = AppError::Database("connection reset by peer".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.detail, "Database error occurred");

        let response = AppError::DatabaseUnavailable("not configured".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_of(response).await.detail, "Database is not available");
    }
}
