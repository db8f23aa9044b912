//! Bearer-token authentication extractor.
//!
//! Protected handlers take `RequireApiAuth` as an argument; health stays
//! public by simply not using it.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use secrecy::ExposeSecret;

use crate::error::AppError;
use crate::state::AppState;

/// Prefix of a bearer credential in the `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// Extractor that requires a valid gateway bearer token.
///
/// The credential is the text following `"Bearer "` (empty when the header
/// is absent or malformed) and is compared for exact equality against the
/// configured secret. An empty configured secret rejects every request.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_auth: RequireApiAuth) -> impl IntoResponse {
///     // only reached with a valid token
/// }
/// ```
pub struct RequireApiAuth;

impl<S> FromRequestParts<S> for RequireApiAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let secret = state.config().api_token.expose_secret();

        let credential = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix(BEARER_PREFIX))
            .unwrap_or("");

        if secret.is_empty() || credential != secret {
            return Err(AppError::Unauthorized);
        }

        Ok(Self)
    }
}
