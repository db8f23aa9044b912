//! Handler-level error type.
//!
//! Every handler returns `Result<T, AppError>`; the `IntoResponse` impl
//! produces the structured JSON bodies of the gateway's error contract.
//! Nothing is retried anywhere - a failed step terminates the request.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Application-level error type for the gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed inbound order payload.
    #[error("Missing or invalid fields")]
    InvalidFields,

    /// Upstream reports no matching product or variant.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-success HTTP status from the REST product listing; the raw
    /// upstream body is surfaced for diagnostics.
    #[error("Shopify error")]
    ShopifyGateway { detail: String },

    /// Product listing failed before an upstream status was available.
    #[error("Failed to fetch products: {detail}")]
    FetchProducts { detail: String },

    /// Draft-order mutation yielded no order; carries the raw userErrors.
    #[error("Draft order failed")]
    DraftOrderFailed { details: Value },

    /// Any other failure, surfaced as a stringified message.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Stringify an upstream error for the generic 500 body.
    pub fn upstream(err: &ShopifyError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::ShopifyGateway { .. }
                | Self::FetchProducts { .. }
                | Self::DraftOrderFailed { .. }
                | Self::Internal(_)
        ) {
            tracing::error!(error = %self, "Request error");
        }

        let (status, body) = match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Unauthorized" }),
            ),
            Self::InvalidFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing or invalid fields" }),
            ),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            Self::ShopifyGateway { detail } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Shopify error", "detail": detail }),
            ),
            Self::FetchProducts { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to fetch products", "detail": detail }),
            ),
            Self::DraftOrderFailed { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Draft order failed", "details": details }),
            ),
            Self::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
