//! Variant inventory endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::{AppError, Result};
use crate::middleware::RequireApiAuth;
use crate::shopify::normalize_variant_id;
use crate::shopify::types::VariantStock;
use crate::state::AppState;

/// GET /api/stock/{variant_id} - inventory state of a variant.
///
/// The path parameter may be a bare numeric id or a qualified gid; both
/// target the same variant.
pub async fn show(
    _auth: RequireApiAuth,
    State(state): State<AppState>,
    Path(variant_id): Path<String>,
) -> Result<Json<VariantStock>> {
    let gid = normalize_variant_id(&variant_id);

    let stock = state
        .admin()
        .variant_stock(&gid)
        .await
        .map_err(|err| AppError::upstream(&err))?
        .ok_or_else(|| AppError::NotFound("Variant not found".to_string()))?;

    Ok(Json(stock))
}
