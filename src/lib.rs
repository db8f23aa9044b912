//! Shopgate - HTTP gateway bridging a conversational assistant to Shopify
//! and WhatsApp.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - Shopify is the system of record: every request translates to zero,
//!   one, or two sequential upstream calls and keeps no state of its own
//! - Admin API for inventory reads, draft orders, and the REST product
//!   listing; Storefront API for price lookups
//! - WhatsApp Cloud API for best-effort order notifications
//!
//! # Security
//!
//! Inbound requests authenticate with a single static bearer token
//! (`GATEWAY_API_TOKEN`). The Shopify Admin token held by this process has
//! full read/write access to the store; deploy accordingly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
pub mod whatsapp;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the gateway router with all routes and shared state applied.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
