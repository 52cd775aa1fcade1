//! Reqwest-backed commerce API adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use pointshop_core::catalog::ViewPayload;
use pointshop_core::envelope::ApiEnvelope;
use pointshop_core::gateway::{CommerceApi, GatewayError};
use pointshop_core::purchase::PurchaseResult;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors constructing the adapter.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured base URL does not parse.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments.
    #[error("API base URL cannot carry path segments")]
    BaseUrlNotSegmentable,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Commerce API adapter performing HTTP GET requests against one base URL.
///
/// The shared API credential rides on every request as the `key` query
/// parameter; it comes from deployment configuration and is never
/// user-supplied. Identity tokens and item ids land in the URL path and are
/// percent-encoded by the `url` crate's segment API.
pub struct HttpCommerceApi {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpCommerceApi {
    /// Builds an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the base URL is invalid or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_timeout(base_url, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Builds an adapter with an explicit request timeout. Exceeding the
    /// timeout surfaces as a [`GatewayError`], like any other transport
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the base URL is invalid or the
    /// reqwest client cannot be constructed.
    pub fn with_timeout(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientBuildError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::BaseUrlNotSegmentable);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| GatewayError::new("API base URL cannot carry path segments"))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<ApiEnvelope<T>, GatewayError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        // The API reports business failures inside a 200 envelope; any other
        // transport status means we never reached the envelope contract.
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(GatewayError::new(format!(
                "unexpected transport status {}",
                status.as_u16()
            )));
        }

        serde_json::from_slice(&body)
            .map_err(|err| GatewayError::new(format!("invalid envelope JSON: {err}")))
    }
}

#[async_trait]
impl CommerceApi for HttpCommerceApi {
    async fn view(&self, token: &str) -> Result<ApiEnvelope<ViewPayload>, GatewayError> {
        let url = self.endpoint(&["view", token])?;
        self.fetch(url).await
    }

    async fn purchase(
        &self,
        token: &str,
        item_id: &str,
    ) -> Result<ApiEnvelope<PurchaseResult>, GatewayError> {
        let url = self.endpoint(&["purchase", token, item_id])?;
        self.fetch(url).await
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::new(format!("request timed out: {error}"))
    } else {
        GatewayError::new(error.to_string())
    }
}
