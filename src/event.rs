//! Delete operation, exposed as a serverless event handler.
//!
//! The function is invoked with one of two envelope shapes: a REST-style
//! event carrying the key as a named path parameter, or an HTTP-API-style
//! event where the key is the last segment of a URL-like path field. Both
//! shapes feed a single key-extraction strategy that inspects which
//! fields are present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::ItemStore;

/// Incoming delete event. Either envelope shape deserializes into this;
/// fields absent from a given shape are simply `None`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteEvent {
    /// REST-proxy envelope: the key arrives as a named path parameter.
    #[serde(rename = "pathParameters")]
    pub path_parameters: Option<PathParameters>,
    /// HTTP-API envelope: the key is the final segment of the raw path.
    #[serde(rename = "rawPath")]
    pub raw_path: Option<String>,
    /// Older proxy envelopes carry the same path under `path`.
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PathParameters {
    pub key: Option<String>,
}

/// Structured function response: numeric status code, JSON-encoded body,
/// explicit content-type metadata.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl EventResponse {
    fn json(status_code: u16, body: serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }
}

/// Pull the target key out of whichever envelope shape is present.
///
/// The direct path-parameter field wins; otherwise the key is the final
/// segment of a URL-like path field. Returns `None` when neither shape
/// yields a key.
pub fn extract_key(event: &DeleteEvent) -> Option<String> {
    if let Some(key) = event
        .path_parameters
        .as_ref()
        .and_then(|params| params.key.as_deref())
    {
        if !key.is_empty() {
            return Some(key.to_string());
        }
    }

    let path = event.raw_path.as_deref().or(event.path.as_deref())?;
    // Only the final segment can be the key. A trailing slash leaves it
    // empty, which counts as missing; earlier segments are route prefix,
    // never keys.
    let last = path.rsplit_once('/').map_or(path, |(_, last)| last);
    (!last.is_empty()).then(|| last.to_string())
}

/// Handle one delete event against the store.
///
/// Uses the store's atomic delete-and-return-prior-value primitive, so a
/// single round trip distinguishes "deleted" (200) from "not found" (404).
pub async fn handle_delete<S: ItemStore>(store: &S, event: DeleteEvent) -> EventResponse {
    let Some(key) = extract_key(&event) else {
        return EventResponse::json(400, json!({"error": "Missing key path parameter"}));
    };

    match store.delete(&key).await {
        Ok(Some(_)) => {
            tracing::info!("Deleted item with key: {}", key);
            EventResponse::json(
                200,
                json!({"message": format!("Item with key '{key}' deleted successfully")}),
            )
        }
        Ok(None) => {
            tracing::info!("Delete found nothing at key: {}", key);
            EventResponse::json(404, json!({"error": format!("Item with key '{key}' not found")}))
        }
        Err(err) => {
            tracing::error!("Error deleting item: {:#}", err);
            EventResponse::json(500, json!({"error": "Could not delete item"}))
        }
    }
}
