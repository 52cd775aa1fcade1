//! Shop deployment configuration.

/// Default name of the cookie holding the visitor's identity token.
pub const DEFAULT_COOKIE_NAME: &str = "_POINT_SHOP_ID";

/// Deployment configuration for the storefront.
///
/// Constructed once at startup from the environment and passed into the
/// request handlers; nothing here is user-controlled.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Base URL of the remote commerce API, without a trailing slash.
    pub api_base_url: String,
    /// Shared credential sent with every API call.
    pub api_key: String,
    /// Name of the identity token cookie.
    pub cookie_name: String,
    /// Canonical path of the shop page, used for redirects and retry links.
    pub shop_path: String,
}
