//! MongoDB document store
//!
//! Provides connection management, the [`DocumentStore`] adapter used by the
//! domain repositories, and filter/identifier helpers.

mod config;
mod connector;
mod filter;
mod health;
mod store;

pub use config::MongoConfig;
#[cfg(feature = "config")]
pub use config::EnvPresence;
pub use connector::{MongoError, connect_from_config, open_store};
pub use filter::Filter;
pub use health::{HealthStatus, check_health_detailed};
pub use store::{DocumentStore, Resource, StoreError, StoreResult, StoredDocument, parse_object_id};

// Re-export MongoDB types for convenience
pub use mongodb::bson;
pub use mongodb::{Client, Collection, Database};
