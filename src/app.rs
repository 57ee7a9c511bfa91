use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, not_found_handler, update_handler,
};
use crate::routes;
use crate::state::AppState;

/// Create the application router with all routes and middleware.
///
/// Unknown paths and unsupported methods on known paths share the same
/// JSON 404 handler.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(routes::USERS, post(create_handler))
        .route(
            routes::USER_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
