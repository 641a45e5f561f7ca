use std::net::SocketAddr;
use std::sync::Arc;

use logo_api_proxy::{api, config, fal};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();
    if config.fal_api_key.is_none() {
        tracing::warn!("FAL_API_KEY is not set; /generate will answer with a configuration error");
    }

    // Create the upstream client and shared state
    let fal_client = fal::client::FalClient::new(config.fal_api_url.clone());
    let state = Arc::new(api::routes::AppState {
        fal_client,
        fal_api_key: config.fal_api_key.clone(),
    });

    let app = api::routes::router(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8189", port_str);
        8189
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
