//! Catalog payload types and the item availability normalizer.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

/// Default identifier for an item missing its `id` field.
pub const MISSING_ID: &str = "unknown";
/// Default title for an item missing its `title` field.
pub const MISSING_TITLE: &str = "Missing Title";
/// Default description for an item missing its `description` field.
pub const MISSING_DESCRIPTION: &str =
    "This item has no description associated. You should report this issue to staff.";
/// Placeholder image for an item missing its `image` field.
pub const MISSING_IMAGE: &str =
    "https://icon-library.com/images/photo-placeholder-icon/photo-placeholder-icon-7.jpg";

/// Payload of a successful view call, as sent by the API.
///
/// Category order and item order within a category follow the server;
/// rendering must not reorder them.
#[derive(Debug, Deserialize)]
pub struct ViewPayload {
    /// Two-part shop heading.
    pub title: [String; 2],
    /// Symbol prefixed to all rendered amounts.
    pub currency_symbol: String,
    /// Shop description shown above the catalog.
    pub description: String,
    /// The visitor's account data.
    pub user: UserAccount,
    /// Category name → ordered items.
    pub categories: IndexMap<String, Vec<RawItem>>,
    /// Optional subtitle per category, looked up by name.
    #[serde(default)]
    pub category_subtitles: HashMap<String, String>,
}

/// The visitor's account as reported by the view call.
#[derive(Debug, Deserialize)]
pub struct UserAccount {
    /// Current balance, in the shop's plain currency unit.
    pub balance: i64,
}

/// One catalog item as sent by the API. Every field may be absent; defaults
/// are filled in field by field during normalization.
#[derive(Debug, Default, Deserialize)]
pub struct RawItem {
    /// Item identifier, submitted back on purchase.
    #[serde(default)]
    pub id: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Display description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Price in the shop's currency unit.
    #[serde(default)]
    pub price: Option<i64>,
    /// Server-declared availability.
    #[serde(default)]
    pub available: Option<bool>,
    /// Badge label → style class, in display order.
    #[serde(default)]
    pub badges: Option<IndexMap<String, String>>,
}

impl RawItem {
    /// Applies field-by-field defaults, then the display-only affordability
    /// guard: an item priced above `balance` is never shown as available,
    /// whatever the server declared. The guard is not a security boundary —
    /// the authoritative check happens server-side at purchase time.
    #[must_use]
    pub fn normalize(self, balance: i64) -> Item {
        let price = self.price.unwrap_or(0);
        let available = self.available.unwrap_or(false) && price <= balance;
        Item {
            id: self.id.unwrap_or_else(|| MISSING_ID.to_owned()),
            title: self.title.unwrap_or_else(|| MISSING_TITLE.to_owned()),
            description: self
                .description
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_owned()),
            image: self.image.unwrap_or_else(|| MISSING_IMAGE.to_owned()),
            price,
            available,
            badges: self.badges,
        }
    }
}

/// A fully normalized catalog item: every field populated, affordability
/// already folded into `available`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Price in the shop's currency unit.
    pub price: i64,
    /// Whether the visitor may attempt to purchase the item.
    pub available: bool,
    /// Badge label → style class; `None` means no badges are shown.
    pub badges: Option<IndexMap<String, String>>,
}

/// Normalized view of the shop, ready for rendering.
#[derive(Debug)]
pub struct ShopView {
    /// Two-part shop heading.
    pub title: [String; 2],
    /// Symbol prefixed to all rendered amounts.
    pub currency_symbol: String,
    /// Shop description shown above the catalog.
    pub description: String,
    /// The visitor's current balance.
    pub balance: i64,
    /// Category name → normalized items, in server order.
    pub categories: IndexMap<String, Vec<Item>>,
    /// Optional subtitle per category.
    pub category_subtitles: HashMap<String, String>,
}

impl ShopView {
    /// Subtitle for a category, if the server supplied one.
    #[must_use]
    pub fn subtitle(&self, category: &str) -> Option<&str> {
        self.category_subtitles.get(category).map(String::as_str)
    }
}

impl ViewPayload {
    /// Normalizes every item of every category against the visitor's
    /// balance, preserving server ordering throughout.
    #[must_use]
    pub fn normalize(self) -> ShopView {
        let balance = self.user.balance;
        let categories = self
            .categories
            .into_iter()
            .map(|(name, items)| {
                let items = items
                    .into_iter()
                    .map(|item| item.normalize(balance))
                    .collect();
                (name, items)
            })
            .collect();

        ShopView {
            title: self.title,
            currency_symbol: self.currency_symbol,
            description: self.description,
            balance,
            categories,
            category_subtitles: self.category_subtitles,
        }
    }
}
