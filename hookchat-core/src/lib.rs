//! # hookchat-core
//!
//! Core types and traits for the hookchat client: the conversation [`Message`] model,
//! the outbound [`OutboundEnvelope`] wire shape, the normalized [`InboundItem`] reply unit,
//! the error taxonomy, the [`KeyValueStore`] abstraction for durable client-side state,
//! and tracing initialization. Transport-agnostic; used by every other hookchat crate.

pub mod error;
pub mod kv;
pub mod logger;
pub mod transport;
pub mod types;

pub use error::{ChatError, Result, WebhookError};
pub use kv::{KeyValueStore, PREFERRED_VOICE_KEY, SESSION_ID_KEY};
pub use logger::init_tracing;
pub use transport::ReplyTransport;
pub use types::{
    Attachment, Coordinates, EnvelopeMetadata, FileMetadata, InboundItem, Message, MessageKind,
    OutboundEnvelope, PayloadKind, Sender,
};
