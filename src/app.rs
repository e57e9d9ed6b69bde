use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{get_handler, health_handler, list_handler, put_handler};
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;

/// Build the HTTP router with every route wired to the given state.
pub fn router<S: ItemStore>(state: AppState<S>) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::LIST, get(list_handler::<S>))
        .route(routes::PUT, post(put_handler::<S>))
        .route(routes::GET_ITEM, get(get_handler::<S>))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
