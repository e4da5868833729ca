//! Generic document access over a single MongoDB database.

use futures_util::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors raised by [`DocumentStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Parse a 24-character hex string into an [`ObjectId`].
pub fn parse_object_id(raw: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}

#[derive(Clone, Debug)]
enum Handle {
    Connected(Database),
    Unavailable(String),
}

/// Process-wide handle to the document database.
///
/// Built once at startup and cloned into every router. A store that failed to
/// open is still a valid value: it reports itself unavailable and every
/// operation returns [`StoreError::Unavailable`] instead of touching the network.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    handle: Handle,
}

impl DocumentStore {
    pub fn connected(database: Database) -> Self {
        Self {
            handle: Handle::Connected(database),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            handle: Handle::Unavailable(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.handle, Handle::Connected(_))
    }

    /// Name of the underlying database, if connected.
    pub fn name(&self) -> Option<&str> {
        match &self.handle {
            Handle::Connected(db) => Some(db.name()),
            Handle::Unavailable(_) => None,
        }
    }

    /// Why the store could not be opened, if it is unavailable.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.handle {
            Handle::Connected(_) => None,
            Handle::Unavailable(reason) => Some(reason),
        }
    }

    fn database(&self) -> StoreResult<&Database> {
        match &self.handle {
            Handle::Connected(db) => Ok(db),
            Handle::Unavailable(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    /// Insert `record` into `collection` and return the assigned id as a hex string.
    #[instrument(skip(self, record))]
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> StoreResult<String>
    where
        T: Serialize + Send + Sync,
    {
        let result = self
            .database()?
            .collection::<T>(collection)
            .insert_one(record)
            .await?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };

        tracing::debug!(collection, document_id = %id, "Document inserted");
        Ok(id)
    }

    /// Every document in `collection` matching `filter`. No limit is applied.
    #[instrument(skip(self))]
    pub async fn get_documents<T>(
        &self,
        collection: &str,
        filter: Document,
    ) -> StoreResult<Vec<StoredDocument<T>>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = self
            .database()?
            .collection::<StoredDocument<T>>(collection)
            .find(filter)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    pub async fn find_document<T>(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> StoreResult<Option<StoredDocument<T>>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let found = self
            .database()?
            .collection::<StoredDocument<T>>(collection)
            .find_one(doc! { "_id": id })
            .await?;

        Ok(found)
    }

    #[instrument(skip(self))]
    pub async fn count_documents(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let count = self
            .database()?
            .collection::<Document>(collection)
            .count_documents(filter)
            .await?;

        Ok(count)
    }

    #[instrument(skip(self))]
    pub async fn collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.database()?.list_collection_names().await?)
    }

    /// Round-trip a `ping` command.
    pub async fn ping(&self) -> StoreResult<()> {
        self.database()?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// A record as read back from the store: the internal `_id` plus the record's
/// own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument<T> {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub record: T,
}

impl<T> StoredDocument<T> {
    pub fn new(id: ObjectId, record: T) -> Self {
        Self {
            id: Some(id),
            record,
        }
    }

    /// Replace the internal `_id` with a plain string `id`.
    pub fn into_resource(self) -> Resource<T> {
        Resource {
            id: self.id.map(|oid| oid.to_hex()),
            record: self.record,
        }
    }
}

/// A record as returned to API callers.
///
/// Serializes as the record's fields plus `"id"`; `"id"` is omitted when the
/// stored document carried no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub record: T,
}
