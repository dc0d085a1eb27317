//! Message, sender, and payload types for the conversation model.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Payload category of a message. Text is the default; each other kind has
/// exactly one matching payload field on [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Audio,
    Location,
    File,
    Image,
}

/// File attachment details kept for in-session preview.
///
/// `local_path` points at the picked file on disk and is never sent over the
/// wire in this form; the transport gets a base64 copy of the bytes instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub byte_size: u64,
    pub local_path: PathBuf,
}

/// Geographic coordinates in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry in the conversation.
///
/// Exactly one of `attachment`, `coordinates`, `audio_payload` is populated,
/// matching `kind` (none for Text). The constructors below are the only way
/// messages are built, which keeps that invariant out of callers' hands.
/// `text` is always present; for non-text kinds it is the display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub attachment: Option<Attachment>,
    pub coordinates: Option<Coordinates>,
    pub audio_payload: Option<String>,
}

impl Message {
    fn new(sender: Sender, text: String, kind: MessageKind) -> Self {
        let prefix = match sender {
            Sender::User => "user",
            Sender::Bot => "bot",
        };
        Self {
            id: format!("{}-{}", prefix, Uuid::new_v4()),
            text,
            sender,
            timestamp: Utc::now(),
            kind,
            attachment: None,
            coordinates: None,
            audio_payload: None,
        }
    }

    /// Plain text message.
    pub fn text(sender: Sender, text: impl Into<String>) -> Self {
        Self::new(sender, text.into(), MessageKind::Text)
    }

    /// Audio message: `label` is the display text, `payload_base64` the
    /// encoded audio bytes held in memory for replay.
    pub fn audio(sender: Sender, label: impl Into<String>, payload_base64: impl Into<String>) -> Self {
        let mut msg = Self::new(sender, label.into(), MessageKind::Audio);
        msg.audio_payload = Some(payload_base64.into());
        msg
    }

    /// Shared-location message.
    pub fn location(sender: Sender, label: impl Into<String>, coordinates: Coordinates) -> Self {
        let mut msg = Self::new(sender, label.into(), MessageKind::Location);
        msg.coordinates = Some(coordinates);
        msg
    }

    /// Attached-file message.
    pub fn file(sender: Sender, label: impl Into<String>, attachment: Attachment) -> Self {
        let mut msg = Self::new(sender, label.into(), MessageKind::File);
        msg.attachment = Some(attachment);
        msg
    }

    /// Attached-image message (also used for camera captures).
    pub fn image(sender: Sender, label: impl Into<String>, attachment: Attachment) -> Self {
        let mut msg = Self::new(sender, label.into(), MessageKind::Image);
        msg.attachment = Some(attachment);
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: constructors populate exactly the payload field matching the kind.**
    #[test]
    fn test_payload_matches_kind() {
        let text = Message::text(Sender::User, "hi");
        assert_eq!(text.kind, MessageKind::Text);
        assert!(text.attachment.is_none() && text.coordinates.is_none() && text.audio_payload.is_none());

        let audio = Message::audio(Sender::Bot, "Audio message", "QUJD");
        assert_eq!(audio.kind, MessageKind::Audio);
        assert_eq!(audio.audio_payload.as_deref(), Some("QUJD"));
        assert!(audio.attachment.is_none() && audio.coordinates.is_none());

        let loc = Message::location(
            Sender::User,
            "Location shared",
            Coordinates { latitude: 1.5, longitude: -2.5 },
        );
        assert_eq!(loc.kind, MessageKind::Location);
        assert_eq!(loc.coordinates.unwrap().latitude, 1.5);
        assert!(loc.attachment.is_none() && loc.audio_payload.is_none());
    }

    /// **Test: ids are unique across messages and prefixed by sender role.**
    #[test]
    fn test_ids_unique_and_prefixed() {
        let a = Message::text(Sender::User, "a");
        let b = Message::text(Sender::User, "b");
        let c = Message::text(Sender::Bot, "c");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("user-"));
        assert!(c.id.starts_with("bot-"));
    }
}
