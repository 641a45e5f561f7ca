//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Defaults are provided for convenience during development.
//! `FAL_API_KEY` has no default: it is the one secret in the system, and its
//! absence is surfaced per-request as a configuration error rather than a
//! startup crash.
use std::env;
use dotenv;

pub const DEFAULT_FAL_API_URL: &str = "https://fal.run/fal-ai/flux/schnell";

pub struct Config {
    pub fal_api_key: Option<String>,
    pub fal_api_url: String,
    pub api_host: String,
    pub api_port: String,
    pub logo_api_url: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            fal_api_key: env::var("FAL_API_KEY").ok().filter(|k| !k.is_empty()),
            fal_api_url: env::var("FAL_API_URL").unwrap_or_else(|_| DEFAULT_FAL_API_URL.to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8189".to_string()),
            logo_api_url: env::var("LOGO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8189".to_string()),
        })
    }

    /// Print the effective environment. The API key is masked; only its
    /// presence is reported.
    pub fn print_env_vars() {
        println!("FAL_API_KEY: {}", if env::var("FAL_API_KEY").map(|k| !k.is_empty()).unwrap_or(false) { "<set>" } else { "<unset>" });
        println!("FAL_API_URL: {}", env::var("FAL_API_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
        println!("LOGO_API_URL: {}", env::var("LOGO_API_URL").unwrap_or_else(|_| "<unset>".to_string()));
    }
}
