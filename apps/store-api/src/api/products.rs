//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router (`/products`, `/products/{id}`, `/seed`)
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.store.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
