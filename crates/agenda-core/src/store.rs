//! Persistence seams: the document store and scoped key/value storage.
//!
//! The controller only talks to persistence through these traits.
//! [`crate::db::Database`] implements [`DocumentStore`] on SQLite and
//! [`crate::storage::LocalStorage`] implements [`KeyValueStore`] on a JSON
//! file.

use serde_json::Value;

use crate::error::Result;

/// A record read back from a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier assigned by the store on insert
    pub id: u64,
    /// The stored JSON object
    pub data: Value,
}

/// Collection-scoped CRUD over JSON documents.
pub trait DocumentStore {
    /// Inserts `record` into `collection` and returns the assigned id.
    fn add_document(&mut self, collection: &str, record: &Value) -> Result<u64>;

    /// Fetches a single document.
    fn get_document(&self, collection: &str, id: u64) -> Result<Option<Document>>;

    /// Lists a collection in insertion order.
    fn query(&self, collection: &str) -> Result<Vec<Document>>;

    /// Lists a collection ordered by the timestamp stored in `field`.
    fn ordered_query(&self, collection: &str, field: &str, descending: bool)
    -> Result<Vec<Document>>;

    /// Merges `partial` into an existing document. Keys set to `null` are
    /// removed. Returns `false` when the document does not exist.
    fn update_document(&mut self, collection: &str, id: u64, partial: &Value) -> Result<bool>;

    /// Deletes a document. Returns `false` when it did not exist.
    fn delete_document(&mut self, collection: &str, id: u64) -> Result<bool>;
}

/// String key/value storage scoped to the local user.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
