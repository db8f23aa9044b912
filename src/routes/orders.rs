//! Draft-order creation endpoint.
//!
//! Pipeline per request: validate payload, resolve the target variant,
//! create the draft order, then fire a best-effort notification. Only the
//! draft-order step's outcome determines the HTTP response.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::{AppError, Result};
use crate::middleware::RequireApiAuth;
use crate::shopify::{DraftOrderParams, ShopifyError, normalize_variant_id};
use crate::state::AppState;
use crate::whatsapp::messages::{self, OrderNotification};

use super::price::PRODUCT_NOT_FOUND;

/// Inbound order payload.
///
/// Fields are loosely typed so that a malformed body maps to the single
/// 400 validation error instead of a framework rejection; `validate`
/// enforces the real contract.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    product_handle: Option<String>,
    #[serde(default)]
    quantity: Option<Value>,
    #[serde(default)]
    variant_id: Option<String>,
}

/// A validated order request.
#[derive(Debug)]
struct ValidOrder {
    name: String,
    phone: String,
    address: String,
    city: String,
    product_handle: String,
    quantity: i64,
    variant_id: Option<String>,
}

impl OrderRequest {
    /// Enforce the order contract: name, phone, address, city, and
    /// productHandle non-empty; quantity a JSON number (integral, since it
    /// becomes a line-item Int); variantId optional.
    fn validate(self) -> std::result::Result<ValidOrder, AppError> {
        let name = require_string(self.name)?;
        let phone = require_string(self.phone)?;
        let address = require_string(self.address)?;
        let city = require_string(self.city)?;
        let product_handle = require_string(self.product_handle)?;

        let quantity = match self.quantity {
            Some(Value::Number(n)) => n.as_i64().ok_or(AppError::InvalidFields)?,
            _ => return Err(AppError::InvalidFields),
        };

        Ok(ValidOrder {
            name,
            phone,
            address,
            city,
            product_handle,
            quantity,
            variant_id: self.variant_id,
        })
    }
}

fn require_string(value: Option<String>) -> std::result::Result<String, AppError> {
    value.filter(|s| !s.is_empty()).ok_or(AppError::InvalidFields)
}

/// POST /api/orders - create a draft order and notify recipients.
///
/// `quantity` must be an integral JSON number; it becomes the line-item
/// `Int`, so fractional values fail validation with the 400 response.
pub async fn create(
    _auth: RequireApiAuth,
    State(state): State<AppState>,
    payload: std::result::Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    // A body that fails to deserialize at all is the same validation error
    // as one with missing fields.
    let Json(request) = payload.map_err(|_| AppError::InvalidFields)?;
    let order = request.validate()?;

    // Resolve the target variant: caller-supplied id wins, otherwise the
    // product handle's first variant.
    let variant_id = match &order.variant_id {
        Some(id) => normalize_variant_id(id),
        None => state
            .storefront()
            .first_variant(&order.product_handle)
            .await
            .map_err(|err| AppError::upstream(&err))?
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?
            .variant_id,
    };

    let draft = state
        .admin()
        .create_draft_order(&DraftOrderParams {
            variant_id: &variant_id,
            quantity: order.quantity,
            name: &order.name,
            phone: &order.phone,
            address: &order.address,
            city: &order.city,
        })
        .await
        .map_err(|err| match err {
            ShopifyError::UserError(details) => AppError::DraftOrderFailed { details },
            other => AppError::upstream(&other),
        })?;

    info!(draft_order_id = %draft.id, "Draft order created");

    // Best-effort notification; its outcome is never part of the contract.
    if let Some(whatsapp) = state.whatsapp() {
        let text = messages::order_created(&OrderNotification {
            name: &order.name,
            phone: &order.phone,
            city: &order.city,
            address: &order.address,
            product_handle: &order.product_handle,
            quantity: order.quantity,
            invoice_url: &draft.invoice_url,
        });
        whatsapp.notify_all(&text).await;
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "ok": true,
            "draftOrderId": draft.id,
            "invoiceUrl": draft.invoice_url,
        })),
    ))
}
