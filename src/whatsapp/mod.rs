//! WhatsApp Cloud API client for best-effort order notifications.
//!
//! Notification delivery is never part of a request's contract: every send
//! is isolated, failures are logged and swallowed, and the gateway runs
//! without a client at all when the WhatsApp configuration is absent.

mod client;
pub mod messages;

pub use client::WhatsAppClient;

use thiserror::Error;

/// Errors that can occur when sending a WhatsApp message.
#[derive(Debug, Error)]
pub enum WhatsAppError {
    /// HTTP request failed.
    #[error("WhatsApp request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Cloud API returned a non-success status.
    #[error("WhatsApp API error ({status}): {body}")]
    Api { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_error_display() {
        let err = WhatsAppError::Api {
            status: 400,
            body: "invalid recipient".to_string(),
        };
        assert_eq!(err.to_string(), "WhatsApp API error (400): invalid recipient");
    }
}
