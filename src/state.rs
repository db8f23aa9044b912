//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::shopify::{AdminClient, StorefrontClient};
use crate::whatsapp::WhatsAppClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; everything inside is read-only after
/// startup - the gateway keeps no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GatewayConfig,
    admin: AdminClient,
    storefront: StorefrontClient,
    whatsapp: Option<WhatsAppClient>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        let admin = AdminClient::new(&config.shopify);
        let storefront = StorefrontClient::new(&config.shopify);
        let whatsapp = config.whatsapp.as_ref().map(WhatsAppClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                admin,
                storefront,
                whatsapp,
            }),
        }
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Admin API client.
    #[must_use]
    pub fn admin(&self) -> &AdminClient {
        &self.inner.admin
    }

    /// Get a reference to the Shopify Storefront API client.
    #[must_use]
    pub fn storefront(&self) -> &StorefrontClient {
        &self.inner.storefront
    }

    /// Get the WhatsApp client, if notifications are configured.
    #[must_use]
    pub fn whatsapp(&self) -> Option<&WhatsAppClient> {
        self.inner.whatsapp.as_ref()
    }
}
