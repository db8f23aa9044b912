//! Shopify Admin and Storefront API clients.
//!
//! # Architecture
//!
//! - Raw GraphQL documents posted with `reqwest`; the `data` field of a
//!   successful response is handed back as `serde_json::Value`
//! - Shopify is the system of record - no local sync, no caching, and
//!   every upstream call is a single attempt with no retry
//!
//! # APIs
//!
//! ## Admin API (privileged)
//! - Inventory reads, draft-order creation, REST product listing
//!
//! ## Storefront API (public)
//! - Product and price lookups by handle

mod admin;
mod storefront;
pub mod types;

pub use admin::{AdminClient, DraftOrderParams};
pub use storefront::StorefrontClient;

use thiserror::Error;

/// Prefix of a fully-qualified Shopify product variant id.
const VARIANT_GID_PREFIX: &str = "gid://shopify/ProductVariant/";

/// Errors that can occur when interacting with the Shopify APIs.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success HTTP status.
    #[error("Shopify returned HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// GraphQL query returned an error array; the raw payload is kept
    /// for diagnostics.
    #[error("GraphQL errors: {0}")]
    GraphQL(serde_json::Value),

    /// Mutation succeeded at the GraphQL level but reported user errors.
    #[error("User errors: {0}")]
    UserError(serde_json::Value),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Normalize a variant identifier to the qualified `gid://` form.
///
/// Identifiers may arrive as a bare legacy numeric id or already
/// qualified; normalizing a qualified id is a no-op.
#[must_use]
pub fn normalize_variant_id(id: &str) -> String {
    if id.starts_with("gid://") {
        id.to_string()
    } else {
        format!("{VARIANT_GID_PREFIX}{id}")
    }
}
