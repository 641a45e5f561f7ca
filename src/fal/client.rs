//! Thin HTTP client for the fal.ai text-to-image endpoint.
//!
//! One operation: `generate` posts a prompt with fixed generation settings
//! and returns the upstream JSON. Settings are tuned for low latency over
//! quality (square HD, 4 inference steps, a single image), matching what the
//! logo form needs.
use reqwest::Client;
use serde_json::{json, Value};
use crate::error::{AppResult, AppError};

#[derive(Clone)]
pub struct FalClient {
    client: Client,
    base_url: String,
}

impl FalClient {
    pub fn new(base_url: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        FalClient { client: Client::new(), base_url: base }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate one image for `prompt`, authenticated with `api_key`.
    ///
    /// Returns the upstream JSON body verbatim on success. A non-success
    /// upstream status becomes `AppError::Upstream` carrying the status so
    /// callers can relay it; the upstream's error text is logged here and
    /// kept out of anything client-facing.
    pub async fn generate(&self, api_key: &str, prompt: &str) -> AppResult<Value> {
        tracing::info!("Sending generation request to fal.ai at URL: {}", self.base_url);

        let response = self.client.post(&self.base_url)
            .header("Authorization", format!("Key {}", api_key))
            .json(&json!({
                "prompt": prompt,
                "image_size": "square_hd",
                "num_inference_steps": 4,
                "num_images": 1,
            }))
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let body = response.json().await.map_err(AppError::HttpClient)?;
            tracing::info!("Generation request succeeded");
            Ok(body)
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("fal.ai API error ({}): {}", status, error_body);
            Err(AppError::Upstream { status: status.as_u16(), body: error_body })
        }
    }
}
