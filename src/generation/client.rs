//! Client-side generation request lifecycle.
//!
//! `GenerationClient` orchestrates one generation attempt against the proxy:
//! validate input, enter the loading state, POST the composed prompt,
//! interpret the response, and surface the outcome through an injected
//! [`UiPort`]. The port is the only thing that touches whatever UI hosts the
//! form, which keeps the lifecycle testable without one.
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::prompt::composer::{build_prompt, LogoStyle};

/// Visual modes of the generation form. Owned exclusively by the client;
/// transitions here are the only mutation path for visible controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Generating,
    ShowingResult,
    ShowingError,
}

/// Capability set the client needs from its host UI. A visual host may
/// render `show_error` as a transient message (the browser form auto-hides
/// it after a few seconds); a terminal host just prints.
pub trait UiPort {
    fn set_loading(&mut self, loading: bool);
    fn show_result(&mut self, url: &str);
    fn show_error(&mut self, message: &str);
}

/// Tagged interpretation of the upstream payload's image field. The payload
/// is an untyped document; this is the one shape assumption made about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    Url(String),
    MissingImage,
    MalformedPayload,
}

/// Pull `images[0].url` out of an upstream result document.
pub fn extract_image_url(result: &Value) -> ImagePayload {
    let Some(images) = result.get("images").and_then(|v| v.as_array()) else {
        return ImagePayload::MalformedPayload;
    };
    match images.first() {
        None => ImagePayload::MissingImage,
        Some(first) => match first.get("url").and_then(|v| v.as_str()) {
            Some(url) => ImagePayload::Url(url.to_string()),
            None => ImagePayload::MalformedPayload,
        },
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

pub struct GenerationClient<U: UiPort> {
    http: reqwest::Client,
    api_url: String,
    ui: U,
    state: UiState,
}

impl<U: UiPort> GenerationClient<U> {
    pub fn new(api_url: String, ui: U) -> Self {
        let api_url = api_url.trim_end_matches('/').to_string();
        GenerationClient {
            http: reqwest::Client::new(),
            api_url,
            ui,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Run one generation attempt. Returns the resolved image URL on
    /// success.
    ///
    /// Empty (after trimming) name or description, or an unrecognized
    /// style, fails before any network traffic. Once the attempt starts,
    /// the loading indicator is cleared again on every path; no outcome
    /// leaves the submit control disabled.
    pub async fn submit(&mut self, name: &str, description: &str, style: &str) -> AppResult<String> {
        let name = name.trim();
        let description = description.trim();

        if name.is_empty() {
            self.ui.show_error("Please enter a project name");
            return Err(AppError::Validation("Please enter a project name".to_string()));
        }
        if description.is_empty() {
            self.ui.show_error("Please enter a description");
            return Err(AppError::Validation("Please enter a description".to_string()));
        }
        let style: LogoStyle = match style.parse() {
            Ok(style) => style,
            Err(err) => {
                self.ui.show_error("Please choose a valid style");
                return Err(err);
            }
        };

        self.state = UiState::Generating;
        self.ui.set_loading(true);

        let prompt = build_prompt(name, description, style);
        let outcome = self.request_generation(&prompt).await;

        // Runs on every path out of the attempt.
        self.ui.set_loading(false);

        match outcome {
            Ok(url) => {
                self.ui.show_result(&url);
                self.state = UiState::ShowingResult;
                Ok(url)
            }
            Err(err) => {
                tracing::error!("Generation failed: {:?}", err);
                let message = match &err {
                    AppError::Generation(message) => message.clone(),
                    _ => "Failed to generate logo. Please try again.".to_string(),
                };
                self.ui.show_error(&message);
                self.state = UiState::ShowingError;
                Err(err)
            }
        }
    }

    async fn request_generation(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/generate", self.api_url);
        let response = self.http.post(&url)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        let status = response.status();
        let result: Value = response.json().await.map_err(AppError::HttpClient)?;

        if !status.is_success() {
            let message = result.get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Failed to generate logo")
                .to_string();
            return Err(AppError::Generation(message));
        }

        match extract_image_url(&result) {
            ImagePayload::Url(url) => Ok(url),
            ImagePayload::MissingImage | ImagePayload::MalformedPayload => {
                Err(AppError::Generation("No image generated".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    /// UI port that records every call for assertions.
    #[derive(Default)]
    struct RecordingUi {
        loading_calls: Vec<bool>,
        result: Option<String>,
        errors: Vec<String>,
    }

    impl UiPort for RecordingUi {
        fn set_loading(&mut self, loading: bool) {
            self.loading_calls.push(loading);
        }
        fn show_result(&mut self, url: &str) {
            self.result = Some(url.to_string());
        }
        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    async fn spawn_proxy(status: StatusCode, body: Value) -> String {
        let app = Router::new().route(
            "/generate",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );
        let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
            .serve(app.into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        format!("http://{}", addr)
    }

    fn client(api_url: &str) -> GenerationClient<RecordingUi> {
        GenerationClient::new(api_url.to_string(), RecordingUi::default())
    }

    #[tokio::test]
    async fn blank_name_never_reaches_the_network() {
        // Closed port: any attempted request would fail differently than
        // the validation error asserted here.
        let mut client = client("http://127.0.0.1:1");
        let err = client.submit("   ", "a weather app", "modern").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(client.ui().errors, vec!["Please enter a project name"]);
        assert!(client.ui().loading_calls.is_empty());
        assert_eq!(client.state(), UiState::Idle);
    }

    #[tokio::test]
    async fn blank_description_never_reaches_the_network() {
        let mut client = client("http://127.0.0.1:1");
        let err = client.submit("Nimbus", "\t ", "modern").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(client.ui().errors, vec!["Please enter a description"]);
        assert!(client.ui().loading_calls.is_empty());
    }

    #[tokio::test]
    async fn unknown_style_never_reaches_the_network() {
        let mut client = client("http://127.0.0.1:1");
        let err = client.submit("Nimbus", "a weather app", "brutalist").await.unwrap_err();
        assert!(matches!(err, AppError::UnknownStyle(_)));
        assert_eq!(client.ui().errors, vec!["Please choose a valid style"]);
        assert!(client.ui().loading_calls.is_empty());
    }

    #[tokio::test]
    async fn successful_generation_shows_the_image() {
        let url = spawn_proxy(StatusCode::OK, json!({"images": [{"url": "X"}]})).await;
        let mut client = client(&url);
        let resolved = client.submit("Nimbus", "a weather app", "playful").await.unwrap();
        assert_eq!(resolved, "X");
        assert_eq!(client.state(), UiState::ShowingResult);
        assert_eq!(client.ui().result.as_deref(), Some("X"));
        assert_eq!(client.ui().loading_calls, vec![true, false]);
        assert!(client.ui().errors.is_empty());
    }

    #[tokio::test]
    async fn empty_images_list_reports_no_image_generated() {
        let url = spawn_proxy(StatusCode::OK, json!({"images": []})).await;
        let mut client = client(&url);
        let err = client.submit("Nimbus", "a weather app", "modern").await.unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
        assert_eq!(client.state(), UiState::ShowingError);
        assert_eq!(client.ui().errors, vec!["No image generated"]);
        assert_eq!(client.ui().loading_calls, vec![true, false]);
    }

    #[tokio::test]
    async fn proxy_error_body_is_surfaced() {
        let url = spawn_proxy(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})).await;
        let mut client = client(&url);
        client.submit("Nimbus", "a weather app", "modern").await.unwrap_err();
        assert_eq!(client.state(), UiState::ShowingError);
        assert_eq!(client.ui().errors, vec!["boom"]);
        assert_eq!(client.ui().loading_calls, vec![true, false]);
    }

    #[tokio::test]
    async fn proxy_error_without_error_field_falls_back() {
        let url = spawn_proxy(StatusCode::BAD_GATEWAY, json!({})).await;
        let mut client = client(&url);
        client.submit("Nimbus", "a weather app", "modern").await.unwrap_err();
        assert_eq!(client.ui().errors, vec!["Failed to generate logo"]);
    }

    #[tokio::test]
    async fn network_failure_still_resets_loading() {
        let mut client = client("http://127.0.0.1:1");
        let err = client.submit("Nimbus", "a weather app", "modern").await.unwrap_err();
        assert!(matches!(err, AppError::HttpClient(_)));
        assert_eq!(client.state(), UiState::ShowingError);
        assert_eq!(
            client.ui().errors,
            vec!["Failed to generate logo. Please try again."]
        );
        assert_eq!(client.ui().loading_calls, vec![true, false]);
    }

    #[test]
    fn image_extraction_distinguishes_missing_from_malformed() {
        assert_eq!(
            extract_image_url(&json!({"images": [{"url": "X"}]})),
            ImagePayload::Url("X".to_string())
        );
        assert_eq!(extract_image_url(&json!({"images": []})), ImagePayload::MissingImage);
        assert_eq!(extract_image_url(&json!({})), ImagePayload::MalformedPayload);
        assert_eq!(
            extract_image_url(&json!({"images": [{"b64": "..."}]})),
            ImagePayload::MalformedPayload
        );
        assert_eq!(
            extract_image_url(&json!({"images": "nope"})),
            ImagePayload::MalformedPayload
        );
    }
}
