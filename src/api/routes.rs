//! API route configuration.

use crate::api::handlers::{
    create_domain_handler, create_publisher_handler, delete_domain_handler,
    delete_publisher_handler, get_publisher_handler, publisher_list_handler,
    rename_publisher_handler, update_domain_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Publisher and domain routes.
///
/// # Endpoints
///
/// - `GET    /publishers`                               - List publishers with domains
/// - `POST   /publishers`                               - Create a publisher
/// - `GET    /publishers/{name}`                        - Fetch one publisher
/// - `PUT    /publishers/{name}`                        - Rename a publisher
/// - `DELETE /publishers/{name}`                        - Delete a publisher and its domains
/// - `POST   /publishers/{name}/domains`                - Add a domain
/// - `PUT    /publishers/{name}/domains/{domain_name}`  - Update a domain
/// - `DELETE /publishers/{name}/domains/{domain_name}`  - Delete a domain
pub fn publisher_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/publishers",
            get(publisher_list_handler).post(create_publisher_handler),
        )
        .route(
            "/publishers/{name}",
            get(get_publisher_handler)
                .put(rename_publisher_handler)
                .delete(delete_publisher_handler),
        )
        .route("/publishers/{name}/domains", post(create_domain_handler))
        .route(
            "/publishers/{name}/domains/{domain_name}",
            put(update_domain_handler).delete(delete_domain_handler),
        )
}
