//! Logo API Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the server binary.
//! - `fal`: Thin client for the fal.ai text-to-image endpoint.
//! - `prompt`: Logo prompt composition from name/description/style.
//! - `generation`: Client-side request lifecycle and logo download.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `FalClient`,
//! `GenerationClient`, and `LogoStyle`.
pub mod api;
pub mod fal;
pub mod prompt;
pub mod generation;
pub mod config;
pub mod error;

pub use config::Config;
pub use fal::client::FalClient;
pub use generation::client::GenerationClient;
pub use prompt::composer::LogoStyle;
