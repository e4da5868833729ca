use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(e) => AppError::ValidationError(e),
            OrderError::Unavailable(reason) => AppError::DatabaseUnavailable(reason),
            OrderError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(reason) => OrderError::Unavailable(reason),
            other => OrderError::Database(other.to_string()),
        }
    }
}
