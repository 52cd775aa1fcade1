//! Purchase call payload types.

use serde::Deserialize;

use crate::catalog::MISSING_TITLE;

/// Payload of a successful purchase envelope.
///
/// A success envelope only means the request was processed without error;
/// whether the purchase itself went through lives in `success` here.
#[derive(Debug, Deserialize)]
pub struct PurchaseResult {
    /// Whether the purchase was completed.
    pub success: bool,
    /// Rejection reason when the purchase was declined.
    #[serde(default)]
    pub reason: Option<String>,
    /// The item the purchase applied to.
    #[serde(default)]
    pub item: Option<PurchasedItem>,
}

/// The purchased item as echoed back by the API. Only the title is consumed
/// by the confirmation heading.
#[derive(Debug, Deserialize)]
pub struct PurchasedItem {
    /// Display title of the item.
    #[serde(default)]
    pub title: Option<String>,
}

/// Outcome of one purchase attempt, consumed immediately to annotate the
/// subsequent view render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// The purchase went through; the title feeds the confirmation heading.
    Completed {
        /// Title of the purchased item.
        title: String,
    },
    /// The purchase was declined for a domain reason.
    Declined {
        /// Server-supplied rejection reason.
        reason: String,
    },
}

impl PurchaseResult {
    /// Collapses the nested result into an outcome, defaulting absent
    /// titles and reasons so the caller always has something to show.
    #[must_use]
    pub fn into_outcome(self) -> PurchaseOutcome {
        if self.success {
            let title = self
                .item
                .and_then(|item| item.title)
                .unwrap_or_else(|| MISSING_TITLE.to_owned());
            PurchaseOutcome::Completed { title }
        } else {
            let reason = self
                .reason
                .unwrap_or_else(|| "The purchase was declined.".to_owned());
            PurchaseOutcome::Declined { reason }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(body: serde_json::Value) -> PurchaseResult {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_completed_purchase_carries_item_title() {
        let outcome = result(serde_json::json!({
            "success": true,
            "reason": null,
            "item": { "title": "Gold Badge" }
        }))
        .into_outcome();

        assert_eq!(
            outcome,
            PurchaseOutcome::Completed {
                title: "Gold Badge".into()
            }
        );
    }

    #[test]
    fn test_completed_purchase_without_item_falls_back_to_default_title() {
        let outcome = result(serde_json::json!({ "success": true })).into_outcome();

        assert_eq!(
            outcome,
            PurchaseOutcome::Completed {
                title: MISSING_TITLE.into()
            }
        );
    }

    #[test]
    fn test_declined_purchase_carries_server_reason() {
        let outcome = result(serde_json::json!({
            "success": false,
            "reason": "Insufficient balance"
        }))
        .into_outcome();

        assert_eq!(
            outcome,
            PurchaseOutcome::Declined {
                reason: "Insufficient balance".into()
            }
        );
    }

    #[test]
    fn test_declined_purchase_without_reason_gets_generic_message() {
        let outcome = result(serde_json::json!({ "success": false })).into_outcome();

        let PurchaseOutcome::Declined { reason } = outcome else {
            panic!("expected a declined outcome");
        };
        assert!(!reason.is_empty());
    }
}
