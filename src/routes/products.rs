//! Product listing endpoint.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::error::{AppError, Result};
use crate::middleware::RequireApiAuth;
use crate::shopify::ShopifyError;
use crate::state::AppState;

/// Bounded page size for the single-page listing.
const PRODUCT_PAGE_SIZE: u32 = 50;

/// GET /api/products - list active, published products.
///
/// A non-success upstream status maps to 502 with the raw body attached;
/// anything else that fails maps to 500.
pub async fn list(_auth: RequireApiAuth, State(state): State<AppState>) -> Result<Json<Value>> {
    let products = state
        .admin()
        .list_products(PRODUCT_PAGE_SIZE)
        .await
        .map_err(|err| match err {
            ShopifyError::Transport { body, .. } => AppError::ShopifyGateway { detail: body },
            other => AppError::FetchProducts {
                detail: other.to_string(),
            },
        })?;

    Ok(Json(json!({
        "count": products.len(),
        "products": products,
    })))
}
