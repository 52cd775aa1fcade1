//! Pointshop storefront server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pointshop_client::HttpCommerceApi;
use pointshop_core::config::{DEFAULT_COOKIE_NAME, ShopConfig};
use pointshop_web::routes;
use pointshop_web::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting pointshop storefront server");

    // Read configuration from environment.
    let api_base_url = std::env::var("SHOP_API_BASE_URL")
        .map_err(|_| "SHOP_API_BASE_URL environment variable must be set")?;
    let api_key = std::env::var("SHOP_API_KEY")
        .map_err(|_| "SHOP_API_KEY environment variable must be set")?;
    let cookie_name =
        std::env::var("SHOP_COOKIE_NAME").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string());
    let shop_path = std::env::var("SHOP_PATH").unwrap_or_else(|_| "/".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;

    let config = ShopConfig {
        api_base_url,
        api_key,
        cookie_name,
        shop_path,
    };

    // Build the commerce API gateway and application state.
    let api = HttpCommerceApi::new(&config.api_base_url, config.api_key.clone())?;
    let app_state = AppState::new(config, Arc::new(api));

    // Build router.
    let app = axum::Router::new()
        .merge(routes::health::router())
        .merge(routes::shop::router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
