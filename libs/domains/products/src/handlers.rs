//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use axum_helpers::errors::responses::{
    BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse,
    ServiceUnavailableResponse,
};
use database::mongodb::parse_object_id;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductQuery, ProductResponse, SeedResult};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, seed_products),
    components(
        schemas(Product, ProductResponse, ProductQuery, SeedResult),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Catalog browsing and demo data")
    )
)]
pub struct ApiDoc;

/// Create the products router: `/products`, `/products/{id}` and `/seed`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products::<R>))
        .route("/products/{id}", get(get_product::<R>))
        .route("/seed", post(seed_products::<R>))
        .with_state(shared_service)
}

/// List products, optionally filtered by title text and category
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductResponse>),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    // Malformed ids are rejected before the store is queried.
    let id = parse_object_id(&id)?;
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Insert the demo catalog when no products exist yet
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Products",
    responses(
        (status = 200, description = "Number of products inserted", body = SeedResult),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<SeedResult>> {
    let result = service.seed_demo_products().await?;
    Ok(Json(result))
}
