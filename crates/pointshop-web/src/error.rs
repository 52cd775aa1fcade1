//! Terminal error presentation.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use pointshop_core::error::ShopError;

use crate::render;

/// A terminal error view: HTTP-equivalent status, user-facing message, a
/// retryability hint, and navigation actions (label → path).
///
/// Terminal errors stop rendering of the shop page entirely; there is no
/// partial catalog render on error.
#[derive(Debug)]
pub struct ErrorPage {
    /// Status sent with the response.
    pub status: StatusCode,
    /// User-facing message.
    pub message: String,
    /// Whether a user-initiated retry may succeed.
    pub retryable: bool,
    /// Navigation actions offered on the page.
    pub actions: Vec<(String, String)>,
}

impl ErrorPage {
    /// Builds the error view for a `ShopError`. Transport and API failures
    /// get Retry / Go Home actions; a missing identity gets none, since
    /// retrying without a fresh token cannot help.
    #[must_use]
    pub fn for_error(error: &ShopError, shop_path: &str) -> Self {
        let actions = if matches!(error, ShopError::MissingIdentity) {
            Vec::new()
        } else {
            vec![
                ("Retry".to_owned(), shop_path.to_owned()),
                ("Go Home".to_owned(), "/".to_owned()),
            ]
        };

        Self {
            status: StatusCode::from_u16(error.status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message: error.to_string(),
            retryable: error.is_retryable(),
            actions,
        }
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let body = render::error_page(
            self.status.as_u16(),
            &self.message,
            self.retryable,
            &self.actions,
        );
        (self.status, Html(body)).into_response()
    }
}
