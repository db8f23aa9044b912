//! WhatsApp Cloud API client.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::config::WhatsAppConfig;

use super::WhatsAppError;

/// WhatsApp Cloud API base URL.
const WHATSAPP_API_BASE: &str = "https://graph.facebook.com/v20.0";

/// Client for sending text messages through the WhatsApp Cloud API.
#[derive(Clone)]
pub struct WhatsAppClient {
    /// HTTP client.
    client: Client,
    /// Cloud API base URL.
    base_url: String,
    /// Cloud API bearer token.
    access_token: SecretString,
    /// Sending phone number id.
    phone_number_id: String,
    /// Recipient phone numbers for order notifications.
    recipients: Vec<String>,
}

impl std::fmt::Debug for WhatsAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppClient")
            .field("access_token", &"[REDACTED]")
            .field("phone_number_id", &self.phone_number_id)
            .field("recipients", &self.recipients.len())
            .finish_non_exhaustive()
    }
}

impl WhatsAppClient {
    /// Create a new WhatsApp client from a complete configuration.
    #[must_use]
    pub fn new(config: &WhatsAppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config
                .api_base
                .clone()
                .unwrap_or_else(|| WHATSAPP_API_BASE.to_string()),
            access_token: config.access_token.clone(),
            phone_number_id: config.phone_number_id.clone(),
            recipients: config.recipients.clone(),
        }
    }

    /// Send a single text message to one recipient.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the send.
    #[instrument(skip(self, body), fields(to = %to))]
    pub async fn send_text(&self, to: &str, body: &str) -> Result<(), WhatsAppError> {
        let url = format!("{}/{}/messages", self.base_url, self.phone_number_id);

        let message = json!({
            "messaging_product": "whatsapp",
            "to": to,
            "type": "text",
            "text": { "body": body },
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.access_token.expose_secret())
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WhatsAppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("WhatsApp message sent");
        Ok(())
    }

    /// Send a text message to every configured recipient, one at a time.
    ///
    /// Best-effort: each send has its own error boundary, a failure for
    /// one recipient never aborts the rest, and the collective outcome is
    /// discarded by the caller.
    #[instrument(skip(self, body))]
    pub async fn notify_all(&self, body: &str) {
        for recipient in &self.recipients {
            if let Err(err) = self.send_text(recipient, body).await {
                warn!(
                    recipient = %recipient,
                    error = %err,
                    "Failed to send WhatsApp notification"
                );
            }
        }
    }
}
