use crate::error::{ApiError, ErrorResponse};
use crate::models::PutResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::{ItemStore, KEY_FIELD};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// POST /picus/put handler - Store a JSON object as a new item
///
/// Mints a fresh UUID, injects it under `object_id` (overwriting any
/// client-supplied value of that field) and writes the merged object as a
/// new record. Every call creates a new item; there is no update-by-id.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that malformed, empty, and non-object bodies all produce the same
/// `ErrorResponse` shape with a 400 status.
#[utoipa::path(
    post,
    path = routes::PUT,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Item created", body = PutResponse),
        (status = 400, description = "Malformed, empty, or non-object JSON body", body = ErrorResponse),
        (status = 500, description = "Store write failed", body = ErrorResponse)
    ),
    tag = "picus"
)]
pub async fn put_handler<S: ItemStore>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<PutResponse>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let data: JsonValue = serde_json::from_slice(&body)?;
    let mut item = match data {
        JsonValue::Object(map) if !map.is_empty() => map,
        JsonValue::Object(_) => return Err(ApiError::EmptyBody),
        _ => return Err(ApiError::NotAnObject),
    };

    let object_id = Uuid::new_v4().to_string();
    item.insert(KEY_FIELD.to_string(), JsonValue::String(object_id.clone()));

    state.store.put(item).await?;

    tracing::info!("Stored new item with {}: {}", KEY_FIELD, object_id);
    Ok((StatusCode::CREATED, Json(PutResponse { object_id })))
}
