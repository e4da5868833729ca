//! Handler tests for Products domain
//!
//! These tests drive the products router over an in-memory repository:
//! - Query parameter handling
//! - Response serialization (`id` instead of `_id`)
//! - HTTP status codes for malformed and missing ids
//! - Seeding idempotence

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::mongodb::{DocumentStore, bson::oid::ObjectId};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()

/// Catalog kept in memory, matching the same way the MongoDB filter does.
#[derive(Clone, Default)]
struct InMemoryProductRepository {
    products: Arc<Mutex<Vec<(ObjectId, Product)>>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<String> {
        let id = ObjectId::new();
        self.products.lock().unwrap().push((id, product));
        Ok(id.to_hex())
    }

    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<ProductResponse>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(oid, product)| ProductResponse {
                id: Some(oid.to_hex()),
                product: product.clone(),
            }))
    }

    async fn list(&self, query: ProductQuery) -> ProductResult<Vec<ProductResponse>> {
        let needle = query.search_text().map(str::to_lowercase);
        let category = query.category();

        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| {
                needle
                    .as_deref()
                    .is_none_or(|n| p.title.to_lowercase().contains(n))
            })
            .filter(|(_, p)| category.is_none_or(|c| p.category == c))
            .map(|(oid, product)| ProductResponse {
                id: Some(oid.to_hex()),
                product: product.clone(),
            })
            .collect())
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.products.lock().unwrap().len() as u64)
    }
}

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::default()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn seed() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/seed")
        .body(Body::empty())
        .unwrap()
}

async fn seeded_app() -> Router {
    let app = app();
    let response = app.clone().oneshot(seed()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    app
}

fn titles(products: &[Value]) -> Vec<&str> {
    products
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_empty_catalog_returns_empty_array() {
    let response = app().oneshot(get("/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Value> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_seed_twice_inserts_four_then_zero() {
    let app = app();

    let first: Value = json_body(app.clone().oneshot(seed()).await.unwrap().into_body()).await;
    assert_eq!(first["inserted"], 4);

    let second: Value = json_body(app.clone().oneshot(seed()).await.unwrap().into_body()).await;
    assert_eq!(second["inserted"], 0);

    let products: Vec<Value> =
        json_body(app.oneshot(get("/products")).await.unwrap().into_body()).await;
    assert_eq!(products.len(), 4);
}

#[tokio::test]
async fn test_listed_products_carry_string_id_not_internal_id() {
    let app = seeded_app().await;

    let products: Vec<Value> =
        json_body(app.oneshot(get("/products")).await.unwrap().into_body()).await;

    for product in &products {
        assert!(!product["id"].as_str().unwrap().is_empty());
        assert!(product.get("_id").is_none());
        assert_eq!(product["in_stock"], true);
    }
}

#[tokio::test]
async fn test_filter_by_category() {
    let app = seeded_app().await;

    let response = app.oneshot(get("/products?category=footwear")).await.unwrap();
    let products: Vec<Value> = json_body(response.into_body()).await;

    assert_eq!(titles(&products), vec!["White Leather Sneakers"]);
}

#[tokio::test]
async fn test_search_ignores_case() {
    let app = seeded_app().await;

    for q in ["cream", "CREAM", "Cream"] {
        let response = app
            .clone()
            .oneshot(get(&format!("/products?q={q}")))
            .await
            .unwrap();
        let products: Vec<Value> = json_body(response.into_body()).await;
        assert_eq!(titles(&products), vec!["Cream Overshirt"], "q={q}");
    }
}

#[tokio::test]
async fn test_search_and_category_combine() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(get("/products?q=white&category=tops"))
        .await
        .unwrap();
    let products: Vec<Value> = json_body(response.into_body()).await;
    assert!(products.is_empty());

    let response = app
        .oneshot(get("/products?q=white&category=footwear"))
        .await
        .unwrap();
    let products: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(titles(&products), vec!["White Leather Sneakers"]);
}

#[tokio::test]
async fn test_empty_query_parameters_are_ignored() {
    let app = seeded_app().await;

    let response = app.oneshot(get("/products?q=&category=")).await.unwrap();
    let products: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 4);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = seeded_app().await;

    let products: Vec<Value> = json_body(
        app.clone()
            .oneshot(get("/products?category=outerwear"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let id = products[0]["id"].as_str().unwrap();

    let response = app.oneshot(get(&format!("/products/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Value = json_body(response.into_body()).await;
    assert_eq!(product["id"], id);
    assert_eq!(product["title"], "Cream Overshirt");
    assert_eq!(product["price"], 69.0);
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app()
        .oneshot(get(&format!("/products/{}", ObjectId::new().to_hex())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn test_get_malformed_id_returns_400() {
    let response = app().oneshot(get("/products/not-an-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Invalid product id");
}

#[tokio::test]
async fn test_unavailable_store_returns_503() {
    let repo = MongoProductRepository::new(DocumentStore::unavailable("DATABASE_URL not set"));
    let app = handlers::router(ProductService::new(repo));

    let response = app.clone().oneshot(get("/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app.oneshot(seed()).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Database is not available");
}

#[tokio::test]
async fn test_created_product_is_listed_with_all_fields() {
    let repo = InMemoryProductRepository::default();
    let input = Product {
        title: "Linen Camp Shirt".to_string(),
        description: "Relaxed fit, breathable linen.".to_string(),
        price: 59.5,
        category: "tops".to_string(),
        in_stock: false,
        images: vec!["https://images.example.com/linen.jpg".to_string()],
        sizes: vec!["M".to_string(), "L".to_string()],
        colors: vec!["sand".to_string()],
        tags: vec!["linen".to_string(), "summer".to_string()],
    };

    let created = ProductService::new(repo.clone())
        .create_product(input.clone())
        .await
        .unwrap();

    let app = handlers::router(ProductService::new(repo));
    let products: Vec<ProductResponse> =
        json_body(app.oneshot(get("/products")).await.unwrap().into_body()).await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, created.id);
    assert_eq!(products[0].product, input);
}
