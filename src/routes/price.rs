//! First-variant price lookup endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::{AppError, Result};
use crate::middleware::RequireApiAuth;
use crate::shopify::types::PriceQuote;
use crate::state::AppState;

/// 404 body text for missing products and zero-variant products alike.
pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found or has no variants";

/// GET /api/price/{handle} - price of a product's first variant.
pub async fn show(
    _auth: RequireApiAuth,
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<PriceQuote>> {
    let quote = state
        .storefront()
        .first_variant(&handle)
        .await
        .map_err(|err| AppError::upstream(&err))?
        .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

    Ok(Json(quote))
}
