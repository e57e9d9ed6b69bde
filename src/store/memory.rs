use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{anyhow, Result};
use serde_json::Value as JsonValue;

use super::{Item, ItemStore, KEY_FIELD};

/// In-memory item store backed by a `HashMap`.
///
/// Drop-in substitute for [`super::DynamoStore`] in tests and local runs
/// without AWS credentials. Semantics match the real store: `put`
/// overwrites by key, `delete` returns the prior value.
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items. Used by tests to assert that rejected
    /// requests create no record.
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ItemStore for MemoryStore {
    async fn scan_all(&self) -> Result<Vec<Item>> {
        let items = self.items.read().map_err(|_| anyhow!("Store lock poisoned"))?;
        Ok(items.values().cloned().collect())
    }

    async fn put(&self, item: Item) -> Result<()> {
        let key = item
            .get(KEY_FIELD)
            .and_then(JsonValue::as_str)
            .ok_or_else(|| anyhow!("Item is missing the {KEY_FIELD} field"))?
            .to_string();

        let mut items = self.items.write().map_err(|_| anyhow!("Store lock poisoned"))?;
        items.insert(key, item);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Item>> {
        let items = self.items.read().map_err(|_| anyhow!("Store lock poisoned"))?;
        Ok(items.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<Option<Item>> {
        let mut items = self.items.write().map_err(|_| anyhow!("Store lock poisoned"))?;
        Ok(items.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(key: &str, name: &str) -> Item {
        match json!({KEY_FIELD: key, "name": name}) {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new();

        store.put(item("k1", "first")).await.unwrap();

        let found = store.get("k1").await.unwrap();
        assert_eq!(found, Some(item("k1", "first")));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();

        let found = store.get("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_put_without_key_field_is_rejected() {
        let store = MemoryStore::new();
        let mut bad = Item::new();
        bad.insert("name".to_string(), json!("no key"));

        let result = store.put(bad).await;

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_prior_value_exactly_once() {
        let store = MemoryStore::new();
        store.put(item("k1", "first")).await.unwrap();

        let first = store.delete("k1").await.unwrap();
        assert_eq!(first, Some(item("k1", "first")));

        // Second delete finds nothing: success is reported exactly once.
        let second = store.delete("k1").await.unwrap();
        assert!(second.is_none());

        assert!(store.get("k1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_all_sees_everything_not_deleted() {
        let store = MemoryStore::new();
        store.put(item("k1", "first")).await.unwrap();
        store.put(item("k2", "second")).await.unwrap();
        store.put(item("k3", "third")).await.unwrap();
        store.delete("k2").await.unwrap();

        let mut keys: Vec<String> = store
            .scan_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item[KEY_FIELD].as_str().unwrap().to_string())
            .collect();
        keys.sort();

        assert_eq!(keys, vec!["k1", "k3"]);
    }
}
