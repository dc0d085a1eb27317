//! Webhook client: one POST per envelope, bounded wait, normalized reply.

use async_trait::async_trait;
use hookchat_core::{InboundItem, OutboundEnvelope, ReplyTransport, WebhookError};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::WebhookConfig;
use crate::normalize::normalize_body;

/// HTTP client for the remote webhook. Cheap to clone; holds a reqwest
/// connection pool internally.
#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Performs one request/response cycle.
    ///
    /// The whole cycle, from connect through reading the body, runs under the
    /// configured wait bound; when it expires the request future is dropped,
    /// which aborts the in-flight connection, and the call fails with
    /// `Timeout`. No retries; the caller decides what a failure means.
    pub async fn send(
        &self,
        envelope: &OutboundEnvelope,
    ) -> Result<Vec<InboundItem>, WebhookError> {
        debug!(kind = ?envelope.kind, session_id = %envelope.session_id, "Sending envelope to webhook");

        match timeout(self.config.timeout, self.request_cycle(envelope)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(timeout_secs = self.config.timeout.as_secs(), "Webhook request timed out");
                Err(WebhookError::Timeout)
            }
        }
    }

    async fn request_cycle(
        &self,
        envelope: &OutboundEnvelope,
    ) -> Result<Vec<InboundItem>, WebhookError> {
        let response = self
            .http
            .post(&self.config.url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;

        let status = response.status();
        info!(status = status.as_u16(), "Webhook responded");

        if !status.is_success() {
            return Err(WebhookError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;
        debug!(body_len = body.len(), "Read webhook reply body");

        normalize_body(&body)
    }
}

#[async_trait]
impl ReplyTransport for WebhookClient {
    async fn send(&self, envelope: &OutboundEnvelope) -> Result<Vec<InboundItem>, WebhookError> {
        WebhookClient::send(self, envelope).await
    }
}
