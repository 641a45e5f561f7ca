//! Router setup and shared application state.
use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::fal::client::FalClient;

/// State shared by all proxy invocations. The fal client is stateless and
/// cheap to share; the credential lives here (never read from requests) and
/// is optional so a misconfigured deployment fails per-request instead of
/// at startup.
pub struct AppState {
    pub fal_client: FalClient,
    pub fal_api_key: Option<String>,
}

/// Build the application router. The browser form is a cross-origin caller,
/// hence the permissive CORS layer.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/generate", any(handlers::generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
