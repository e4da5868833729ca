use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::InvalidId(_) => AppError::InvalidId("Invalid product id".to_string()),
            ProductError::Validation(e) => AppError::ValidationError(e),
            ProductError::Unavailable(reason) => AppError::DatabaseUnavailable(reason),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => ProductError::Unavailable(reason),
            StoreError::InvalidId(raw) => ProductError::InvalidId(raw),
            StoreError::Mongo(e) => ProductError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ProductError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (ProductError::Unavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ProductError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_store_unavailable_converts() {
        let err = ProductError::from(StoreError::Unavailable("not configured".into()));
        assert!(matches!(err, ProductError::Unavailable(_)));
    }
}
