//! Orders Domain
//!
//! Accepts checkout submissions and stores them as-is in MongoDB. Orders are
//! write-only from the API's point of view: there is no listing, update or
//! delete, and referenced products are not checked.
//!
//! ```rust,no_run
//! use database::mongodb::DocumentStore;
//! use domain_orders::{handlers, MongoOrderRepository, OrderService};
//!
//! # fn example(store: DocumentStore) {
//! let service = OrderService::new(MongoOrderRepository::new(store));
//! let router = handlers::router(service);
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{Order, OrderCreated, OrderItem};
pub use mongodb::{MongoOrderRepository, ORDER_COLLECTION};
pub use repository::OrderRepository;
pub use service::OrderService;
