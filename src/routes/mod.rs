pub mod docs;
pub mod health;
pub mod users;

use salvo::prelude::*;

pub use health::*;
pub use users::*;

/// Create the main API router with all routes
pub fn create_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(health_check))
        .push(Router::with_path("users/{id}").get(get_user))
        .push(Router::with_path("doc").get(docs::openapi_doc))
        .push(Router::with_path("ui").get(docs::swagger_ui_page))
}

/// Create a minimal router for OpenAPI documentation export.
///
/// Includes only the business endpoints. The health probe, the document
/// endpoint itself, and the Swagger UI use `#[handler]` routes and are left
/// out of the OpenAPI document.
pub fn create_docs_router() -> Router {
    // Brace syntax here flows through `merge_router` verbatim as the
    // document's path key, so it must already be in OpenAPI form.
    Router::new().push(Router::with_path("users/{id}").get(get_user))
}
