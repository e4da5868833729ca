//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use database::mongodb::DocumentStore;
use tracing::instrument;

use crate::error::OrderResult;
use crate::models::Order;
use crate::repository::OrderRepository;

/// Collection holding submitted orders.
pub const ORDER_COLLECTION: &str = "order";

#[derive(Clone)]
pub struct MongoOrderRepository {
    store: DocumentStore,
}

impl MongoOrderRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    async fn create(&self, order: Order) -> OrderResult<String> {
        let id = self.store.create_document(ORDER_COLLECTION, &order).await?;
        tracing::info!(order_id = %id, "Order stored");
        Ok(id)
    }
}
