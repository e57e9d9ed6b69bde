use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::{Item, ItemStore};
use axum::{extract::State, http::StatusCode, Json};

/// GET /picus/list handler - Return every item in the table
///
/// Unbounded scan with no pagination; the whole table comes back in one
/// response regardless of volume. Order is store-dependent.
#[utoipa::path(
    get,
    path = routes::LIST,
    responses(
        (status = 200, description = "All items", body = Vec<serde_json::Value>),
        (status = 500, description = "Store scan failed", body = ErrorResponse)
    ),
    tag = "picus"
)]
pub async fn list_handler<S: ItemStore>(
    State(state): State<AppState<S>>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let items = state.store.scan_all().await?;

    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(items)))
}

#[cfg(test)]
mod tests {
    use crate::app::router;
    use crate::error::ErrorResponse;
    use crate::state::AppState;
    use crate::store::testing::FailingStore;
    use crate::store::MemoryStore;
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        router(AppState::new(MemoryStore::new()))
    }

    async fn put_item(app: &Router, body: &str) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/picus/put")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    async fn list_items(app: &Router) -> Vec<JsonValue> {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/picus/list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let app = setup_test_app();

        let items = list_items(&app).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_includes_every_put_item() {
        let app = setup_test_app();

        put_item(&app, r#"{"name":"a"}"#).await;
        put_item(&app, r#"{"name":"b"}"#).await;
        put_item(&app, r#"{"name":"c"}"#).await;

        let items = list_items(&app).await;
        assert_eq!(items.len(), 3);

        let mut names: Vec<&str> = items
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);

        // Every returned item carries its key.
        for item in &items {
            assert!(item["object_id"].is_string());
        }
    }

    #[tokio::test]
    async fn test_list_store_failure_is_generic_500() {
        let app = router(AppState::new(FailingStore));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/picus/list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: ErrorResponse = serde_json::from_slice(&body).unwrap();
        // The store's own failure detail is logged, never returned.
        assert_eq!(response_json.error, "Storage backend error");
    }
}
