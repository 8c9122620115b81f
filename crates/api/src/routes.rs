//! Route configuration.

use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth_routes, contact_routes, health_routes, person_routes, upload_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Liveness
        .merge(health_routes())
        // Person body, query and path validation
        .nest("/person", person_routes())
        // Form, header, cookie and multipart inputs
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(upload_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
