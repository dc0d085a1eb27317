//! # hookchat-webhook
//!
//! The webhook transport: serializes an [`OutboundEnvelope`], POSTs it to the
//! configured endpoint under a hard wait bound, and normalizes whatever comes
//! back into an ordered `Vec<InboundItem>` or a classified [`WebhookError`].
//!
//! [`OutboundEnvelope`]: hookchat_core::OutboundEnvelope
//! [`InboundItem`]: hookchat_core::InboundItem
//! [`WebhookError`]: hookchat_core::WebhookError

pub mod client;
pub mod config;
pub mod normalize;

pub use client::WebhookClient;
pub use config::WebhookConfig;
pub use normalize::normalize_body;
