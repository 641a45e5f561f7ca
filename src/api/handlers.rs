//! Axum request handlers for the generation proxy.
//!
//! `/generate` is registered for any method and does its own dispatch: the
//! handler owns the whole request lifecycle (method check, body validation,
//! credential check, upstream call, relay) so every failure mode maps to the
//! structured `{"error": ...}` contract instead of a framework rejection.
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn root() -> &'static str {
    "Logo API Proxy"
}

/// Proxy one generation request to fal.ai.
///
/// The body arrives as raw text and is parsed manually: malformed JSON is a
/// 400 per the contract, not a crash and not an axum rejection. Upstream
/// failures relay the upstream status with a generic body; the real error
/// text only ever reaches the server log.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: String,
) -> (StatusCode, Json<Value>) {
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({"error": "Method not allowed. Use POST."})),
        );
    }

    let prompt = match serde_json::from_str::<Value>(&body) {
        Ok(payload) => payload
            .get("prompt")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Err(_) => None,
    };
    let Some(prompt) = prompt else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing or invalid \"prompt\" field in request body."})),
        );
    };

    let Some(api_key) = state.fal_api_key.as_deref() else {
        tracing::error!("FAL_API_KEY environment variable is not set.");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Server configuration error. API key is missing."})),
        );
    };

    match state.fal_client.generate(api_key, &prompt).await {
        Ok(result) => (StatusCode::OK, Json(result)),
        Err(AppError::Upstream { status, .. }) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(json!({"error": "Failed to generate logo. The AI service returned an error."})),
        ),
        Err(err) => {
            tracing::error!("Generation proxy error: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error. Please try again later."})),
            )
        }
    }
}
