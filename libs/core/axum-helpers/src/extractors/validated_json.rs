//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// The body is parsed as JSON whatever its `Content-Type`.
///
/// Rejections:
/// - body that is not JSON, or does not deserialize into `T`: 422
/// - body that deserializes but fails `Validate`: 422 with per-field errors
/// - body that cannot be read at all: the status axum's `Bytes` extractor picks
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Checkout {
///     #[validate(email)]
///     customer_email: String,
/// }
///
/// async fn checkout(ValidatedJson(payload): ValidatedJson<Checkout>) -> String {
///     format!("Order for {}", payload.customer_email)
/// }
///
/// let app = Router::new().route("/orders", post(checkout));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let Json(data) =
            Json::<T>::from_bytes(&body).map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
