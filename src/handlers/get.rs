use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::{Item, ItemStore};
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /picus/get/{key} handler - Retrieve an item by exact key
///
/// The key is not format-validated: any string is looked up and a miss is
/// reported as 404 naming the key.
#[utoipa::path(
    get,
    path = routes::GET_ITEM,
    params(
        ("key" = String, Path, description = "object_id of the item")
    ),
    responses(
        (status = 200, description = "Item found", body = serde_json::Value),
        (status = 404, description = "No item at the key", body = ErrorResponse),
        (status = 500, description = "Store lookup failed", body = ErrorResponse)
    ),
    tag = "picus"
)]
pub async fn get_handler<S: ItemStore>(
    State(state): State<AppState<S>>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    match state.store.get(&key).await? {
        Some(item) => {
            tracing::info!("Retrieved item with key: {}", key);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with key: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
    }
}
