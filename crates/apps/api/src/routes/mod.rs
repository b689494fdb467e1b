pub mod access;
mod api_doc;
pub mod root;
pub mod search;

use crate::access::middleware::enforce_access_policy;
use crate::api_state::ApiContext;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use crate::search::router::search_public_router;
use axum::Router;
use axum::middleware::from_fn_with_state;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    // `layer` instead of `route_layer`: the policy also sees requests that match no route.
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(public_routes())
        .layer(from_fn_with_state(api_state.clone(), enforce_access_policy))
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(search_public_router())
}
