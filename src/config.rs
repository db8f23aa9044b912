//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Server
//! - `GATEWAY_HOST` - Bind address (default: 127.0.0.1)
//! - `GATEWAY_PORT` - Listen port (default: 3000)
//! - `GATEWAY_API_TOKEN` - Bearer token expected on protected endpoints.
//!   When empty, every protected request is rejected.
//!
//! ## Shopify
//! - `SHOPIFY_STORE` - Store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_API_VERSION` - API version (default: 2025-01)
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token
//! - `SHOPIFY_STOREFRONT_TOKEN` - Storefront API access token
//! - `SHOPIFY_API_BASE` - Base URL override (default: `https://$SHOPIFY_STORE`);
//!   useful for staging or test doubles
//!
//! Missing Shopify values do not fail startup; upstream calls simply fail
//! at request time. Shopify is the system of record, not this process.
//!
//! ## WhatsApp (optional)
//! - `WHATSAPP_TOKEN` - Cloud API bearer token
//! - `WHATSAPP_PHONE_NUMBER_ID` - Sending phone number id
//! - `WHATSAPP_RECIPIENTS` - Comma-separated recipient phone numbers
//! - `WHATSAPP_API_BASE` - Cloud API base URL override
//!
//! If any WhatsApp value is absent or empty, order notifications are
//! silently disabled.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Gateway application configuration.
///
/// Read-only after startup; shared with handlers through `AppState`.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Bearer token required on protected endpoints
    pub api_token: SecretString,
    /// Shopify API configuration
    pub shopify: ShopifyConfig,
    /// WhatsApp notification configuration (None when unconfigured)
    pub whatsapp: Option<WhatsAppConfig>,
}

/// Shopify API configuration.
///
/// Implements `Debug` manually to redact token fields.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Admin/Storefront API version (e.g., 2025-01)
    pub api_version: String,
    /// Admin API access token (full read/write)
    pub admin_token: SecretString,
    /// Storefront API access token (public, read-only)
    pub storefront_token: SecretString,
    /// Base URL override; `https://{store}` when unset
    pub api_base: Option<String>,
}

impl ShopifyConfig {
    /// Base URL for Admin and Storefront API calls.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| format!("https://{}", self.store))
    }
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("admin_token", &"[REDACTED]")
            .field("storefront_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// WhatsApp Cloud API configuration.
#[derive(Clone)]
pub struct WhatsAppConfig {
    /// Cloud API bearer token
    pub access_token: SecretString,
    /// Sending phone number id
    pub phone_number_id: String,
    /// Recipient phone numbers for order notifications
    pub recipients: Vec<String>,
    /// Cloud API base URL override
    pub api_base: Option<String>,
}

impl std::fmt::Debug for WhatsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppConfig")
            .field("access_token", &"[REDACTED]")
            .field("phone_number_id", &self.phone_number_id)
            .field("recipients", &self.recipients)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed. Missing
    /// credentials are not an error here; they surface at request time.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("GATEWAY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GATEWAY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GATEWAY_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GATEWAY_PORT".to_string(), e.to_string()))?;
        let api_token = SecretString::from(get_env_or_default("GATEWAY_API_TOKEN", ""));

        Ok(Self {
            host,
            port,
            api_token,
            shopify: ShopifyConfig::from_env(),
            whatsapp: WhatsAppConfig::from_env(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether a non-empty inbound bearer secret is configured.
    #[must_use]
    pub fn has_api_token(&self) -> bool {
        !self.api_token.expose_secret().is_empty()
    }
}

impl ShopifyConfig {
    fn from_env() -> Self {
        Self {
            store: get_env_or_default("SHOPIFY_STORE", ""),
            api_version: get_env_or_default("SHOPIFY_API_VERSION", "2025-01"),
            admin_token: SecretString::from(get_env_or_default("SHOPIFY_ADMIN_TOKEN", "")),
            storefront_token: SecretString::from(get_env_or_default(
                "SHOPIFY_STOREFRONT_TOKEN",
                "",
            )),
            api_base: get_optional_env("SHOPIFY_API_BASE"),
        }
    }
}

impl WhatsAppConfig {
    /// Build the WhatsApp config, returning `None` when any piece is
    /// absent or empty. Notifications are optional functionality.
    fn from_env() -> Option<Self> {
        let access_token = get_optional_env("WHATSAPP_TOKEN")?;
        let phone_number_id = get_optional_env("WHATSAPP_PHONE_NUMBER_ID")?;
        let recipients = parse_recipients(&get_optional_env("WHATSAPP_RECIPIENTS")?);
        if recipients.is_empty() {
            return None;
        }

        Some(Self {
            access_token: SecretString::from(access_token),
            phone_number_id,
            recipients,
            api_base: get_optional_env("WHATSAPP_API_BASE"),
        })
    }
}

/// Split a comma-separated recipient list, dropping empty entries.
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Get an optional environment variable, treating empty values as absent.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
