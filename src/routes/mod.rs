//! HTTP route handlers for the gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health              - Liveness check (public)
//! GET  /api/products            - Active, published products (REST listing)
//! GET  /api/price/{handle}      - First-variant price for a product handle
//! GET  /api/stock/{variant_id}  - Inventory state of a variant
//! POST /api/orders              - Create a draft order (+ notification)
//! ```
//!
//! All routes except the health check require the gateway bearer token.

pub mod health;
pub mod orders;
pub mod price;
pub mod products;
pub mod stock;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/products", get(products::list))
        .route("/api/price/{handle}", get(price::show))
        .route("/api/stock/{variant_id}", get(stock::show))
        .route("/api/orders", post(orders::create))
}
