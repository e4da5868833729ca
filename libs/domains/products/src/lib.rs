//! Products Domain
//!
//! Catalog browsing and demo-data seeding over the shared MongoDB document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, seeding rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{MongoConfig, open_store};
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "store");
//! let store = open_store(&config).await?;
//!
//! let repository = MongoProductRepository::new(store);
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductQuery, ProductResponse, SeedResult};
pub use mongodb::{MongoProductRepository, PRODUCT_COLLECTION};
pub use repository::ProductRepository;
pub use seed::demo_products;
pub use service::ProductService;
