//! Person API Library
//!
//! This crate provides the HTTP API for the person and location schemas.
//! Every input is deserialized and validated by an extractor before a
//! handler runs; handlers only echo, merge or project validated data.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;

    // Create app state and router
    let state = AppState::from_config(config);
    let app = create_router(state);

    info!("Person API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
