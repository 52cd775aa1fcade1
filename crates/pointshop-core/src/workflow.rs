//! The purchase-then-view orchestration workflow.

use crate::catalog::ShopView;
use crate::error::{ApiCall, ShopError};
use crate::gateway::CommerceApi;
use crate::purchase::PurchaseOutcome;

/// Result of a successful shop request: the normalized catalog plus, after a
/// successful purchase, the purchased item's title for the confirmation
/// heading. The catalog is always rendered in full; the title only swaps
/// the heading.
#[derive(Debug)]
pub struct ShopPage {
    /// Title of the item purchased in this request, if any.
    pub purchase_title: Option<String>,
    /// The normalized catalog and account data.
    pub view: ShopView,
}

/// Runs the purchase-then-view sequence for one request.
///
/// The purchase call happens only when the request submitted an item id; no
/// local validation of the id or of affordability is performed — existence,
/// availability, price, and balance checks are all the remote API's
/// authority. The view call always follows a successful purchase so the
/// render reflects the post-purchase balance and availability. The two
/// calls are strictly sequential.
///
/// # Errors
///
/// Any terminal [`ShopError`]: a transport failure or failure envelope from
/// either call, or a nested purchase rejection. A rejection short-circuits
/// before the view call.
pub async fn run_shop_flow(
    api: &dyn CommerceApi,
    token: &str,
    purchase_item: Option<&str>,
) -> Result<ShopPage, ShopError> {
    let purchase_title = match purchase_item {
        Some(item_id) => Some(submit_purchase(api, token, item_id).await?),
        None => None,
    };

    let envelope = api.view(token).await.map_err(|_| ShopError::Transport {
        call: ApiCall::View,
    })?;
    let payload = envelope.into_payload(ApiCall::View)?;

    Ok(ShopPage {
        purchase_title,
        view: payload.normalize(),
    })
}

async fn submit_purchase(
    api: &dyn CommerceApi,
    token: &str,
    item_id: &str,
) -> Result<String, ShopError> {
    let envelope = api
        .purchase(token, item_id)
        .await
        .map_err(|_| ShopError::Transport {
            call: ApiCall::Purchase,
        })?;
    let result = envelope.into_payload(ApiCall::Purchase)?;

    match result.into_outcome() {
        PurchaseOutcome::Completed { title } => Ok(title),
        PurchaseOutcome::Declined { reason } => Err(ShopError::Rejected { reason }),
    }
}
