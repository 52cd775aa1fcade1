//! Minimal HTML rendering for the shop and error pages.
//!
//! Presentation is deliberately skeletal; what matters here is the
//! heading-substitution rule after a purchase, server-ordered categories,
//! and that nothing server-supplied reaches the page unescaped.

use std::fmt::Write;

use pointshop_core::catalog::Item;
use pointshop_core::workflow::ShopPage;

/// Heading shown in place of the first title line after a purchase.
pub const PURCHASE_HEADING: &str = "PURCHASE SUCCESSFUL";

/// Escapes text for use in HTML bodies and attribute values.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Formats an amount with thousands separators and the shop's currency
/// symbol, e.g. `£1,234,567`.
#[must_use]
pub fn format_amount(currency_symbol: &str, value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0 { "-" } else { "" };
    format!("{currency_symbol}{sign}{grouped}")
}

/// Renders the full shop page.
///
/// A purchase title swaps the two-part heading for the confirmation pair;
/// the catalog beneath it is always rendered in full, in server order.
#[must_use]
pub fn shop_page(page: &ShopPage) -> String {
    let view = &page.view;
    let (primary, secondary) = match page.purchase_title.as_deref() {
        Some(title) => (PURCHASE_HEADING, title),
        None => (view.title[0].as_str(), view.title[1].as_str()),
    };

    let mut html = String::from(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Point Shop</title></head><body>",
    );
    let _ = write!(
        html,
        "<header><h1><span class=\"title-1\">{}</span><br><span class=\"title-2\">{}</span></h1><p>{}</p>",
        escape(primary),
        escape(secondary),
        escape(&view.description)
    );
    let _ = write!(
        html,
        "<div class=\"user-balance\"><h4>Your Balance</h4><h1>{}</h1></div></header><main>",
        escape(&format_amount(&view.currency_symbol, view.balance))
    );

    for (category, items) in &view.categories {
        let _ = write!(html, "<section><h3 class=\"title\">{}</h3>", escape(category));
        if let Some(subtitle) = view.subtitle(category) {
            let _ = write!(html, "<h5>{}</h5>", escape(subtitle));
        }
        html.push_str("<div class=\"row\">");
        for item in items {
            html.push_str(&item_card(item, &view.currency_symbol));
        }
        html.push_str("</div></section>");
    }

    html.push_str("</main></body></html>");
    html
}

fn item_card(item: &Item, currency_symbol: &str) -> String {
    let mut badges = String::new();
    if let Some(labels) = &item.badges {
        for (label, class) in labels {
            let _ = write!(
                badges,
                " <span class=\"badge {}\">{}</span>",
                escape(class),
                escape(label)
            );
        }
    }

    // Unavailable covers both server-declared unavailability and the
    // client-side affordability guard; either way no purchase form is
    // offered.
    let buy = if item.available {
        format!(
            "<form method=\"POST\"><input type=\"hidden\" name=\"item_id\" value=\"{}\"><button type=\"submit\" class=\"btn\">BUY NOW</button></form>",
            escape(&item.id)
        )
    } else {
        "<button type=\"button\" class=\"btn disabled\" disabled>BUY NOW</button>".to_owned()
    };

    format!(
        "<div class=\"card\"><img src=\"{}\"><h5 class=\"card-title\">{}{}</h5><p>{}</p><h2 class=\"price\">{}</h2>{}</div>",
        escape(&item.image),
        escape(&item.title),
        badges,
        escape(&item.description),
        escape(&format_amount(currency_symbol, item.price)),
        buy
    )
}

/// Renders a terminal error page with navigation actions.
#[must_use]
pub fn error_page(status: u16, message: &str, retryable: bool, actions: &[(String, String)]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Error {status}</title></head><body><h1>Error {status}</h1><p>{}</p>",
        escape(message)
    );
    if retryable {
        html.push_str("<p>This may be temporary. Retrying the request can help.</p>");
    }
    if !actions.is_empty() {
        html.push_str("<nav>");
        for (label, path) in actions {
            let _ = write!(
                html,
                "<a class=\"btn\" href=\"{}\">{}</a>",
                escape(path),
                escape(label)
            );
        }
        html.push_str("</nav>");
    }
    html.push_str("</body></html>");
    html
}
