//! Domain error types.

use thiserror::Error;

/// Which remote call a failure belongs to. Used in user-facing messages so
/// the visitor can tell whether the purchase or the catalog fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    /// The `purchase/{token}/{item_id}` endpoint.
    Purchase,
    /// The `view/{token}` endpoint.
    View,
}

impl std::fmt::Display for ApiCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Purchase => f.write_str("purchase"),
            Self::View => f.write_str("view"),
        }
    }
}

/// Top-level error type for one shop request.
///
/// Every variant is terminal: it stops rendering of the shop page entirely
/// and is handed to the error presentation layer. No variant is retried
/// automatically; "Retry" is a user-initiated navigation action.
#[derive(Debug, Error)]
pub enum ShopError {
    /// No identity token in the request parameters or the cookie store.
    #[error("Missing valid identification. Try using /shop again in the Discord server!")]
    MissingIdentity,

    /// The remote API could not be reached, or its transport response was
    /// unusable. Distinct from a received failure envelope.
    #[error("Failed to connect to the {call} API.")]
    Transport {
        /// The call that failed.
        call: ApiCall,
    },

    /// The API reported the stored identity token as invalid (envelope
    /// status 401). The token must be invalidated as a corrective side
    /// effect before this error is surfaced.
    #[error("{message}")]
    Unauthorized {
        /// The API-supplied error message.
        message: String,
    },

    /// The API returned a failure envelope other than 401.
    #[error("{message}")]
    Api {
        /// Envelope status code, defaulted to 500 when absent.
        status: u16,
        /// The API-supplied error message.
        message: String,
    },

    /// The purchase reached the API but was declined for a domain reason
    /// (availability, price, balance). The reason is server-supplied.
    #[error("{reason}")]
    Rejected {
        /// The nested rejection reason.
        reason: String,
    },

    /// A success envelope arrived without its payload.
    #[error("The {call} API returned a malformed response.")]
    MalformedEnvelope {
        /// The call that produced the envelope.
        call: ApiCall,
    },
}

impl ShopError {
    /// HTTP-equivalent status for the error presentation layer.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingIdentity | Self::Rejected { .. } => 400,
            Self::Transport { .. } => 503,
            Self::Unauthorized { .. } => 401,
            Self::Api { status, .. } => *status,
            Self::MalformedEnvelope { .. } => 502,
        }
    }

    /// Whether retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::MalformedEnvelope { .. }
        )
    }

    /// Whether the stored identity token must be deleted before this error
    /// is surfaced. True only for envelope status 401, regardless of which
    /// call produced the envelope.
    #[must_use]
    pub fn invalidates_identity(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identity_maps_to_400() {
        assert_eq!(ShopError::MissingIdentity.status(), 400);
    }

    #[test]
    fn test_transport_maps_to_503_and_is_retryable() {
        let err = ShopError::Transport {
            call: ApiCall::View,
        };
        assert_eq!(err.status(), 503);
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "Failed to connect to the view API.");
    }

    #[test]
    fn test_unauthorized_maps_to_401_and_invalidates_identity() {
        let err = ShopError::Unauthorized {
            message: "Invalid token".into(),
        };
        assert_eq!(err.status(), 401);
        assert!(err.invalidates_identity());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_api_error_carries_envelope_status() {
        let err = ShopError::Api {
            status: 418,
            message: "teapot".into(),
        };
        assert_eq!(err.status(), 418);
        assert!(!err.invalidates_identity());
    }

    #[test]
    fn test_rejection_maps_to_400_with_server_reason() {
        let err = ShopError::Rejected {
            reason: "Insufficient balance".into(),
        };
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), "Insufficient balance");
    }
}
