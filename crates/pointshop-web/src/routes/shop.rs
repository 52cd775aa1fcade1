//! The shop page: identity resolution, purchase submission, catalog render.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Router, routing::get};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use pointshop_core::error::ShopError;
use pointshop_core::workflow::run_shop_flow;

use crate::error::ErrorPage;
use crate::identity;
use crate::render;
use crate::state::AppState;

/// Query parameters accepted on both methods.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    /// Fresh identity token to persist before redirecting. Persisted even
    /// when empty; validity is the remote API's concern.
    pub id: Option<String>,
}

/// Form body of a purchase submission.
#[derive(Debug, Deserialize)]
pub struct PurchaseForm {
    /// Identifier of the item to purchase.
    #[serde(default)]
    pub item_id: Option<String>,
}

/// GET /
#[instrument(skip_all)]
async fn view_shop(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
    jar: CookieJar,
) -> Response {
    handle_shop(state, jar, query.id, None).await
}

/// POST / — a purchase submission when `item_id` is present, otherwise the
/// same view flow as GET.
#[instrument(skip_all)]
async fn purchase_shop(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
    jar: CookieJar,
    Form(form): Form<PurchaseForm>,
) -> Response {
    handle_shop(state, jar, query.id, form.item_id).await
}

async fn handle_shop(
    state: AppState,
    jar: CookieJar,
    query_id: Option<String>,
    item_id: Option<String>,
) -> Response {
    let config = &state.config;

    // A supplied `id` parameter always wins: persist it and restart the
    // request cycle so the token disappears from the visible URL and a
    // reload cannot resubmit a purchase.
    if let Some(token) = query_id {
        info!("identity token supplied, persisting and redirecting");
        let jar = identity::persist(jar, &config.cookie_name, &token);
        return (jar, Redirect::to(&config.shop_path)).into_response();
    }

    let Some(token) = identity::resolve(&jar, &config.cookie_name) else {
        return ErrorPage::for_error(&ShopError::MissingIdentity, &config.shop_path)
            .into_response();
    };

    match run_shop_flow(state.api.as_ref(), &token, item_id.as_deref()).await {
        Ok(page) => {
            info!(
                purchased = page.purchase_title.is_some(),
                "rendering shop page"
            );
            Html(render::shop_page(&page)).into_response()
        }
        Err(err) => {
            warn!(status = err.status(), error = %err, "shop request failed");
            let page = ErrorPage::for_error(&err, &config.shop_path);
            if err.invalidates_identity() {
                // The API reported the token as invalid; drop it so the
                // visitor is not stuck with a broken cookie.
                let jar = identity::invalidate(jar, &config.cookie_name);
                (jar, page).into_response()
            } else {
                page.into_response()
            }
        }
    }
}

/// Returns the shop page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(view_shop).post(purchase_shop))
}
