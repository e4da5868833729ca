//! Orders API routes

use axum::Router;
use domain_orders::{MongoOrderRepository, OrderService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoOrderRepository::new(state.store.clone());
    handlers::router(OrderService::new(repository))
}
