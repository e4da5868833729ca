//! Service banner at `/`

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

pub const ROOT_MESSAGE: &str = "Mens Aesthetic Store Backend Running";

#[derive(Serialize, ToSchema)]
pub struct RootMessage {
    #[schema(example = "Mens Aesthetic Store Backend Running")]
    pub message: &'static str,
}

/// Report that the backend is up
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses((status = 200, description = "Backend is running", body = RootMessage))
)]
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: ROOT_MESSAGE,
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}
