use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::PutResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "picus-kv API",
        version = "1.0.0",
        description = "A minimal CRUD facade over a DynamoDB-backed key-value store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::put::put_handler,
        handlers::get::get_handler,
        handlers::list::list_handler
    ),
    components(
        schemas(
            PutResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "picus", description = "Item store operations")
    )
)]
pub struct ApiDoc;
