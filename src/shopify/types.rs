//! Transient value shapes produced from Shopify responses.
//!
//! Every type here is constructed at the start of a request and discarded
//! with the HTTP response; nothing is cached or persisted.

use serde::Serialize;

/// A monetary amount as Shopify reports it (decimal string + currency).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount (e.g., "19.99")
    pub amount: String,
    /// ISO 4217 currency code (e.g., "USD")
    pub currency_code: String,
}

/// A product with its variants, projected from the Admin REST listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Product title
    pub title: String,
    /// URL handle
    pub handle: String,
    /// Variants, ids normalized to qualified `gid://` form
    pub variants: Vec<VariantSummary>,
}

/// A single product variant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    /// Qualified variant id (`gid://shopify/ProductVariant/...`)
    pub id: String,
    /// Variant title
    pub title: String,
    /// Price as a decimal string
    pub price: String,
    /// Available inventory, when the upstream reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
}

/// Price of a product's first variant, looked up by handle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Product handle as requested
    pub product_handle: String,
    /// Product title
    pub product_title: String,
    /// Qualified variant id
    pub variant_id: String,
    /// Variant title
    pub variant_title: String,
    /// Variant price
    pub price: Money,
}

/// Inventory state of a single variant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantStock {
    /// Qualified variant id
    pub variant_id: String,
    /// Available inventory quantity
    pub quantity: i64,
    /// Whether inventory is tracked; defaults to true when upstream
    /// omits the flag
    pub tracked: bool,
}

/// A created draft order and its payable invoice link.
#[derive(Debug, Clone)]
pub struct DraftOrder {
    /// Draft order id
    pub id: String,
    /// Invoice URL the customer can pay through
    pub invoice_url: String,
}
