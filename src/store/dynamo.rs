use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use super::convert::{attributes_to_item, item_to_attributes};
use super::{Item, ItemStore, KEY_FIELD};
use crate::config::Config;

/// DynamoDB-backed item store.
///
/// The table schema is a single string partition key (`object_id`) with
/// heterogeneous attribute sets per item. The client is constructed once
/// per process and shared by cloning.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a store from configuration, resolving AWS credentials and
    /// region from the default provider chain.
    pub async fn from_config(config: &Config) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);

        tracing::info!("DynamoDB client ready for table: {}", config.table_name);

        Self::new(client, &config.table_name)
    }

    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait::async_trait]
impl ItemStore for DynamoStore {
    async fn scan_all(&self) -> Result<Vec<Item>> {
        // The paginator follows continuation tokens, so "all items" really
        // means every page of the scan, not just the first 1 MB.
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send();

        let mut items = Vec::new();
        while let Some(attributes) = pages.next().await {
            let attributes = attributes.context("DynamoDB scan failed")?;
            items.push(attributes_to_item(&attributes)?);
        }

        tracing::debug!("Scanned {} items from {}", items.len(), self.table_name);
        Ok(items)
    }

    async fn put(&self, item: Item) -> Result<()> {
        let attributes = item_to_attributes(&item)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .context("DynamoDB put_item failed")?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_FIELD, AttributeValue::S(key.to_string()))
            .send()
            .await
            .context("DynamoDB get_item failed")?;

        output.item().map(attributes_to_item).transpose()
    }

    async fn delete(&self, key: &str) -> Result<Option<Item>> {
        // ReturnValues=ALL_OLD distinguishes "deleted" from "nothing there"
        // in one round trip: attributes are present only if a record existed.
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_FIELD, AttributeValue::S(key.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .context("DynamoDB delete_item failed")?;

        output.attributes().map(attributes_to_item).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_clonable() {
        // Required for sharing the store across async handlers.
        fn assert_clone<T: Clone>() {}
        assert_clone::<DynamoStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoStore>();
    }
}
