//! Mock `CommerceApi` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use pointshop_core::catalog::ViewPayload;
use pointshop_core::envelope::ApiEnvelope;
use pointshop_core::gateway::{CommerceApi, GatewayError};
use pointshop_core::purchase::PurchaseResult;

/// One remote call observed by [`RecordingCommerceApi`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// A view call with the token it carried.
    View {
        /// Identity token passed to the call.
        token: String,
    },
    /// A purchase call with the token and item id it carried.
    Purchase {
        /// Identity token passed to the call.
        token: String,
        /// Item id passed to the call.
        item_id: String,
    },
}

/// A commerce API that replays configured JSON envelope bodies and records
/// every call. A `None` body stands for a transport failure on that
/// endpoint.
///
/// Bodies are kept as JSON and decoded per call, so a mock can be shared
/// across requests without the envelope types needing `Clone`.
#[derive(Debug)]
pub struct RecordingCommerceApi {
    view_body: Option<serde_json::Value>,
    purchase_body: Option<serde_json::Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingCommerceApi {
    /// Creates a mock replaying `view_body` and `purchase_body`.
    #[must_use]
    pub fn new(
        view_body: Option<serde_json::Value>,
        purchase_body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            view_body,
            purchase_body,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that only serves the view endpoint.
    #[must_use]
    pub fn with_view(view_body: serde_json::Value) -> Self {
        Self::new(Some(view_body), None)
    }

    /// Returns a snapshot of all calls observed so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommerceApi for RecordingCommerceApi {
    async fn view(&self, token: &str) -> Result<ApiEnvelope<ViewPayload>, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall::View {
            token: token.to_owned(),
        });
        let body = self
            .view_body
            .clone()
            .ok_or_else(|| GatewayError::new("connection refused"))?;
        Ok(serde_json::from_value(body).expect("configured view body must decode"))
    }

    async fn purchase(
        &self,
        token: &str,
        item_id: &str,
    ) -> Result<ApiEnvelope<PurchaseResult>, GatewayError> {
        self.calls.lock().unwrap().push(RecordedCall::Purchase {
            token: token.to_owned(),
            item_id: item_id.to_owned(),
        });
        let body = self
            .purchase_body
            .clone()
            .ok_or_else(|| GatewayError::new("connection refused"))?;
        Ok(serde_json::from_value(body).expect("configured purchase body must decode"))
    }
}

/// A commerce API that always fails at the transport level. Useful for
/// exercising 503 error paths.
#[derive(Debug)]
pub struct FailingCommerceApi;

#[async_trait]
impl CommerceApi for FailingCommerceApi {
    async fn view(&self, _token: &str) -> Result<ApiEnvelope<ViewPayload>, GatewayError> {
        Err(GatewayError::new("connection refused"))
    }

    async fn purchase(
        &self,
        _token: &str,
        _item_id: &str,
    ) -> Result<ApiEnvelope<PurchaseResult>, GatewayError> {
        Err(GatewayError::new("connection refused"))
    }
}
