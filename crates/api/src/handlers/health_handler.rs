//! Liveness handler.

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Liveness greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: String,
}

/// Create liveness routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Liveness check - always answers while the server is up.
pub async fn home() -> Json<Greeting> {
    Json(Greeting {
        hello: "World".to_string(),
    })
}
