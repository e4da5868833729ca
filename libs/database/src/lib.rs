//! Database library providing the MongoDB document store used by the store API
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, [`mongodb::DocumentStore`] adapter and filters
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, Filter, MongoConfig};
//!
//! let store = mongodb::open_store(&MongoConfig::with_database(
//!     "mongodb://localhost:27017",
//!     "store",
//! ))
//! .await?;
//!
//! let id = store.create_document("product", &record).await?;
//! let matches = store
//!     .get_documents::<Product>("product", Filter::new().exact("category", "tops").into())
//!     .await?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
