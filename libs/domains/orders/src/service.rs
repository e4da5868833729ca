//! Order Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::OrderResult;
use crate::models::{Order, OrderCreated};
use crate::repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store an order. Products and totals are taken on trust.
    #[instrument(skip(self, order), fields(customer_email = %order.customer_email))]
    pub async fn place_order(&self, order: Order) -> OrderResult<OrderCreated> {
        order.validate()?;

        let id = self.repository.create(order).await?;
        Ok(OrderCreated::new(id))
    }
}
