//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "detail": "Database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Validation Error",
    content_type = "application/json",
    example = json!({
        "detail": "Request validation failed",
        "errors": {
            "customer_email": [{
                "code": "email",
                "message": null,
                "params": {"value": "not-an-email"}
            }]
        }
    })
)]
pub struct UnprocessableEntityResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "detail": "Invalid product id"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "detail": "Product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - database not connected",
    content_type = "application/json",
    example = json!({
        "detail": "Database is not available"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
