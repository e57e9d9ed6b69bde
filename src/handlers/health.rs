use crate::error::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Liveness probe for the container orchestrator
///
/// Always reports healthy without touching the store: the probe answers
/// "is the process serving requests", not "is the backend reachable".
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use crate::app::router;
    use crate::error::HealthResponse;
    use crate::state::AppState;
    use crate::store::MemoryStore;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = router(AppState::new(MemoryStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
    }
}
