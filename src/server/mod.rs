//! Edge HTTP endpoints
//!
//! ```text
//! POST /api/ai/tutor      tutoring answer (fallback on provider failure)
//! GET  /api/hints         hint list for a knowledge point
//! *    /api/health        liveness
//! OPTIONS *               empty 200 (preflight)
//! *                       404 {"error":"Not Found"}
//! ```
//!
//! Every response carries permissive CORS headers.

mod api;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::catalog::Catalog;
use crate::tutor::TutorClient;

pub use api::ApiError;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tutor: TutorClient,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, tutor: TutorClient) -> Self {
        Self { catalog, tutor }
    }
}

/// Build the router with CORS applied to every route and the fallback
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/ai/tutor", post(api::tutor).fallback(api::not_found))
        .route("/api/hints", get(api::hints).fallback(api::not_found))
        .route("/api/health", any(api::health))
        .fallback(api::not_found)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Serve until Ctrl-C
pub async fn run(bind: &str, state: AppState) -> Result<()> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    info!(%bind, "edge server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("edge server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}

/// Answer preflight requests and stamp CORS headers on everything
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}
