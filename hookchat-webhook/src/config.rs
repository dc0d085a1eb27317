//! Transport config: endpoint URL and wait bound. Loaded from env: WEBHOOK_URL, WEBHOOK_TIMEOUT_SECS.

use std::env;
use std::time::Duration;

use anyhow::Result;

/// Default hard ceiling on one request/response cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(35);

/// Webhook transport config (connectivity only).
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout: Duration,
}

impl WebhookConfig {
    /// Loads from env: WEBHOOK_URL required; WEBHOOK_TIMEOUT_SECS optional
    /// (whole seconds, default 35).
    pub fn from_env() -> Result<Self> {
        let url = env::var("WEBHOOK_URL").map_err(|_| anyhow::anyhow!("WEBHOOK_URL not set"))?;
        let timeout = env::var("WEBHOOK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self { url, timeout })
    }

    /// Builds config with the given URL and the default wait bound.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the wait bound (tests use short ones).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: with_url sets the endpoint and keeps the default wait bound.**
    #[test]
    fn test_with_url() {
        let config = WebhookConfig::with_url("http://localhost/webhook");
        assert_eq!(config.url, "http://localhost/webhook");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    /// **Test: with_timeout overrides the wait bound only.**
    #[test]
    fn test_with_timeout() {
        let config =
            WebhookConfig::with_url("http://localhost/webhook").with_timeout(Duration::from_secs(60));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.url, "http://localhost/webhook");
    }
}
