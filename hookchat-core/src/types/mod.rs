//! Core type definitions, split by concern.

pub mod envelope;
pub mod inbound;
pub mod message;

pub use envelope::{EnvelopeMetadata, FileMetadata, OutboundEnvelope, PayloadKind};
pub use inbound::InboundItem;
pub use message::{Attachment, Coordinates, Message, MessageKind, Sender};
