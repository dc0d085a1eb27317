//! Transport abstraction for the webhook request/response cycle.
//!
//! [`ReplyTransport`] is implemented by the real webhook client in
//! hookchat-webhook; tests substitute fakes that return canned replies.

use async_trait::async_trait;

use crate::error::WebhookError;
use crate::types::{InboundItem, OutboundEnvelope};

/// One request/response cycle against the remote endpoint.
///
/// Exactly one outcome per call: a non-empty ordered sequence of
/// [`InboundItem`], or one [`WebhookError`] kind. No retries, no streaming;
/// the whole reply is buffered before any item is returned.
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    async fn send(&self, envelope: &OutboundEnvelope) -> Result<Vec<InboundItem>, WebhookError>;
}
