//! The seam between orchestration and transport.

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::ViewPayload;
use crate::envelope::ApiEnvelope;
use crate::purchase::PurchaseResult;

/// Transport-level failure: no envelope was obtained at all.
///
/// Distinct from `ApiEnvelope { success: false }`, which is a reachable
/// service reporting a business failure. Timeouts and undecodable bodies
/// both land here.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    /// Creates a transport failure with a human-readable description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Authenticated access to the remote commerce API.
///
/// Implementations own all transport concerns, including the shared API
/// credential and timeout policy. Both calls are blocking from the
/// workflow's point of view: a result or a `GatewayError`, never a retry.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Fetches the catalog and balance for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the service is unreachable or the
    /// response cannot be decoded.
    async fn view(&self, token: &str) -> Result<ApiEnvelope<ViewPayload>, GatewayError>;

    /// Submits a purchase of `item_id` on behalf of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the service is unreachable or the
    /// response cannot be decoded.
    async fn purchase(
        &self,
        token: &str,
        item_id: &str,
    ) -> Result<ApiEnvelope<PurchaseResult>, GatewayError>;
}
