mod convert;
mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use anyhow::Result;
use serde_json::Value as JsonValue;

/// A stored record: an open-ended JSON object keyed by `object_id`.
pub type Item = serde_json::Map<String, JsonValue>;

/// Field injected into every item at creation time; the table's partition key.
pub const KEY_FIELD: &str = "object_id";

/// Abstraction over the backing key-value store.
///
/// Both entry surfaces receive an implementation of this trait instead of
/// talking to a concrete client directly, so tests can substitute
/// [`MemoryStore`] for the real [`DynamoStore`].
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Scan every item in the table. Order is store-dependent.
    async fn scan_all(&self) -> Result<Vec<Item>>;

    /// Write one item as a new record. The caller has already injected
    /// the `object_id` field.
    async fn put(&self, item: Item) -> Result<()>;

    /// Exact-key lookup. `Ok(None)` means no item exists at the key.
    async fn get(&self, key: &str) -> Result<Option<Item>>;

    /// Delete one item, returning the prior value if it existed.
    ///
    /// A single atomic store round trip distinguishes the two outcomes:
    /// `Ok(Some(_))` means a record was removed, `Ok(None)` means nothing
    /// existed at the key.
    async fn delete(&self, key: &str) -> Result<Option<Item>>;
}
