//! Shared test helpers for storefront integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, response::Parts};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pointshop_core::config::ShopConfig;
use pointshop_core::gateway::CommerceApi;
use pointshop_web::routes;
use pointshop_web::state::AppState;

/// Cookie name used by every integration test.
pub const COOKIE_NAME: &str = "_POINT_SHOP_ID";

/// Configuration matching `main.rs` defaults.
pub fn test_config() -> ShopConfig {
    ShopConfig {
        api_base_url: "https://api.example.test/plugins/webshop".to_owned(),
        api_key: "secret".to_owned(),
        cookie_name: COOKIE_NAME.to_owned(),
        shop_path: "/".to_owned(),
    }
}

/// Build the full app router against a mock commerce API. Uses the same
/// route structure as `main.rs`.
pub fn build_test_app(api: Arc<dyn CommerceApi>) -> Router {
    let app_state = AppState::new(test_config(), api);
    Router::new()
        .merge(routes::health::router())
        .merge(routes::shop::router())
        .with_state(app_state)
}

/// A canned view envelope: balance 100, one affordable item and one the
/// visitor cannot afford.
pub fn view_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "title": ["OUR SERVER", "POINT SHOP"],
            "currency_symbol": "£",
            "description": "Spend your points.",
            "user": { "balance": 100 },
            "categories": {
                "General": [
                    { "id": "5", "title": "Gold Badge", "price": 50, "available": true },
                    { "id": "9", "title": "Platinum Badge", "price": 500, "available": true }
                ]
            },
            "category_subtitles": { "General": "Everyday items" }
        }
    })
}

/// Send a request and return the response parts plus the body as text.
pub async fn send(app: Router, request: Request<Body>) -> (Parts, String) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    (parts, String::from_utf8(bytes.to_vec()).unwrap())
}

/// GET request carrying a stored identity cookie.
pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("cookie", format!("{COOKIE_NAME}={token}"))
        .body(Body::empty())
        .unwrap()
}

/// GET request with no cookie.
pub fn get_anonymous(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST purchase submission carrying a stored identity cookie.
pub fn post_purchase(token: &str, item_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("cookie", format!("{COOKIE_NAME}={token}"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("item_id={item_id}")))
        .unwrap()
}

/// The `set-cookie` header value, if the response carries one.
pub fn set_cookie_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("set-cookie")
        .map(|value| value.to_str().unwrap().to_owned())
}
