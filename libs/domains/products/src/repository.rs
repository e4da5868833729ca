use async_trait::async_trait;
use database::mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{Product, ProductQuery, ProductResponse};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return its new id
    async fn create(&self, product: Product) -> ProductResult<String>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<ProductResponse>>;

    /// List every product matching the query
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<ProductResponse>>;

    /// Count all products
    async fn count(&self) -> ProductResult<u64>;
}
