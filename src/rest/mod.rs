//! REST API for the mock migration engine.
//!
//! Serves the static catalog over the endpoints the wizard front end calls.
//! Runs standalone (`serve`) or embedded next to the terminal wizard.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use openapi::ApiDoc;
pub use server::{RestApiServer, RestApiStatus};
pub use state::ApiState;

/// Build the API router with all routes
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and API description
        .route("/api/health", get(routes::health::health))
        .route("/api/openapi.json", get(openapi::openapi_json))
        // Migration endpoints
        .route("/api/migration/plan", post(routes::migration::plan))
        .route("/api/migration/proceed", post(routes::migration::proceed))
        .route("/api/migration/phases", get(routes::migration::phases))
        .route("/api/migration/step/:stepId", get(routes::migration::step))
        .route(
            "/api/migration/step/:stepId/modules",
            get(routes::migration::step_modules),
        )
        .route(
            "/api/migration/blueprint/:stepId",
            post(routes::migration::blueprint),
        )
        .fallback(error::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Run the REST API server until Ctrl-C
pub async fn serve(state: ApiState, addr: SocketAddr) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Migration API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Migration API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
