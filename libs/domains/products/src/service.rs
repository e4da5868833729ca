//! Product Service - Business logic layer

use database::mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductQuery, ProductResponse, SeedResult};
use crate::repository::ProductRepository;
use crate::seed::demo_products;

/// Product service providing business logic operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and insert a product, returning the stored record.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn create_product(&self, product: Product) -> ProductResult<ProductResponse> {
        product.validate()?;

        let id = self.repository.create(product.clone()).await?;
        Ok(ProductResponse {
            id: Some(id),
            product,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<ProductResponse> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_hex()))
    }

    /// List products; an empty query returns the whole catalog.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<ProductResponse>> {
        self.repository.list(query).await
    }

    /// Insert the demo catalog if, and only if, the catalog is empty.
    ///
    /// Not atomic: two concurrent calls on an empty catalog may both insert.
    #[instrument(skip(self))]
    pub async fn seed_demo_products(&self) -> ProductResult<SeedResult> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Catalog already populated, skipping seed");
            return Ok(SeedResult { inserted: 0 });
        }

        let mut inserted = 0;
        for product in demo_products() {
            self.repository.create(product).await?;
            inserted += 1;
        }

        tracing::info!(inserted, "Demo catalog seeded");
        Ok(SeedResult { inserted })
    }
}
