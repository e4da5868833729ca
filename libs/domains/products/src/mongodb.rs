//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{DocumentStore, Filter, bson::oid::ObjectId};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductQuery, ProductResponse};
use crate::repository::ProductRepository;

/// Collection holding the catalog.
pub const PRODUCT_COLLECTION: &str = "product";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    store: DocumentStore,
    collection: String,
}

impl MongoProductRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self::with_collection(store, PRODUCT_COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(store: DocumentStore, collection_name: &str) -> Self {
        Self {
            store,
            collection: collection_name.to_string(),
        }
    }

    /// `q` matches inside the title ignoring case; `category` must match exactly.
    fn build_filter(query: &ProductQuery) -> Filter {
        let mut filter = Filter::new();

        if let Some(text) = query.search_text() {
            filter = filter.contains_ignore_case("title", text);
        }

        if let Some(category) = query.category() {
            filter = filter.exact("category", category);
        }

        filter
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(title = %product.title))]
    async fn create(&self, product: Product) -> ProductResult<String> {
        let id = self.store.create_document(&self.collection, &product).await?;
        tracing::info!(product_id = %id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<ProductResponse>> {
        let found = self
            .store
            .find_document::<Product>(&self.collection, id)
            .await?;

        Ok(found.map(|doc| doc.into_resource().into()))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<ProductResponse>> {
        let filter = Self::build_filter(&query);
        let documents = self
            .store
            .get_documents::<Product>(&self.collection, filter.into_document())
            .await?;

        Ok(documents
            .into_iter()
            .map(|doc| doc.into_resource().into())
            .collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        let count = self
            .store
            .count_documents(&self.collection, Filter::new().into_document())
            .await?;
        Ok(count)
    }
}
