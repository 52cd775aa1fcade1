//! The remote API's response envelope and its interpretation.

use serde::Deserialize;

use crate::error::{ApiCall, ShopError};

/// Outer wrapper of every commerce API response.
///
/// `success == false` means the payload must not be trusted; the error
/// metadata describes the failure instead. The purchase endpoint nests its
/// payload under `purchase` rather than `data`, hence the alias.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request was processed without error. This does not imply
    /// that a purchase succeeded — that lives in the nested purchase result.
    pub success: bool,
    /// HTTP-equivalent status for failure envelopes.
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable failure description.
    #[serde(default)]
    pub error_message: Option<String>,
    /// The payload of a success envelope.
    #[serde(default = "Option::default", alias = "purchase")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Interprets the envelope uniformly for both API calls.
    ///
    /// # Errors
    ///
    /// - `success == false` with status 401 → [`ShopError::Unauthorized`];
    ///   the caller must invalidate the stored identity token before
    ///   surfacing it.
    /// - `success == false` otherwise → [`ShopError::Api`] with the envelope
    ///   status (500 when absent) and the message verbatim.
    /// - `success == true` without a payload → [`ShopError::MalformedEnvelope`].
    pub fn into_payload(self, call: ApiCall) -> Result<T, ShopError> {
        if !self.success {
            let message = self
                .error_message
                .unwrap_or_else(|| format!("The {call} API reported an unspecified error."));
            if self.status_code == Some(401) {
                return Err(ShopError::Unauthorized { message });
            }
            return Err(ShopError::Api {
                status: self.status_code.unwrap_or(500),
                message,
            });
        }
        self.data.ok_or(ShopError::MalformedEnvelope { call })
    }
}
