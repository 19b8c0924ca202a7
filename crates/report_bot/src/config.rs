//! Process configuration
//!
//! The access token is required and checked at startup; the delivery
//! mode is derived from whether a public base URL is configured.

/// Runtime configuration consumed from CLI flags / environment.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Chat platform access token.
    pub token: String,

    /// Public base URL for push (webhook) delivery. Pull delivery is
    /// used when unset or blank.
    pub webhook_base_url: Option<String>,

    /// Listen port for push delivery.
    pub port: u16,
}

/// How inbound events reach the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Push delivery: the platform posts updates to our public URL.
    Webhook,
    /// Pull delivery: we poll the platform for updates.
    Polling,
}

impl BotConfig {
    /// Base URL with any trailing slash removed; `None` when blank.
    pub fn normalized_base_url(&self) -> Option<String> {
        self.webhook_base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        if self.normalized_base_url().is_some() {
            DeliveryMode::Webhook
        } else {
            DeliveryMode::Polling
        }
    }
}
