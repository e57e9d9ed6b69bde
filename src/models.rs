use serde::{Deserialize, Serialize};

/// Response type for successful put operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PutResponse {
    pub object_id: String,
}
