//! Outbound webhook envelope: the JSON body sent verbatim on every request.

use serde::Serialize;

use super::message::Coordinates;

/// Payload type tag on the wire (`"type"` field of the envelope).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Text,
    Location,
    File,
    Image,
}

/// File details sent with file/image envelopes. Field names are camelCase on
/// the wire to match what the webhook expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    pub base64_data: String,
}

/// Envelope metadata: coordinates for location, file details for file/image.
/// Text envelopes carry no metadata (`None` at the [`OutboundEnvelope`] level,
/// serialized as JSON `null`).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EnvelopeMetadata {
    Location(Coordinates),
    File(FileMetadata),
}

/// Request body sent to the webhook:
/// `{ "sessionId", "type", "content", "metadata" }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEnvelope {
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub content: String,
    pub metadata: Option<EnvelopeMetadata>,
}

impl OutboundEnvelope {
    /// Text envelope; metadata is null.
    pub fn text(session_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: PayloadKind::Text,
            content: content.into(),
            metadata: None,
        }
    }

    /// Location envelope carrying latitude/longitude.
    pub fn location(
        session_id: impl Into<String>,
        content: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            kind: PayloadKind::Location,
            content: content.into(),
            metadata: Some(EnvelopeMetadata::Location(coordinates)),
        }
    }

    /// File or image envelope carrying the encoded file details.
    /// `kind` must be [`PayloadKind::File`] or [`PayloadKind::Image`].
    pub fn attachment(
        session_id: impl Into<String>,
        content: impl Into<String>,
        kind: PayloadKind,
        metadata: FileMetadata,
    ) -> Self {
        debug_assert!(matches!(kind, PayloadKind::File | PayloadKind::Image));
        Self {
            session_id: session_id.into(),
            kind,
            content: content.into(),
            metadata: Some(EnvelopeMetadata::File(metadata)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: text envelope serializes with explicit null metadata and camelCase keys.**
    #[test]
    fn test_text_envelope_wire_shape() {
        let envelope = OutboundEnvelope::text("session-1", "hello");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sessionId": "session-1",
                "type": "text",
                "content": "hello",
                "metadata": null
            })
        );
    }

    /// **Test: location envelope carries latitude/longitude metadata.**
    #[test]
    fn test_location_envelope_wire_shape() {
        let envelope = OutboundEnvelope::location(
            "session-1",
            "User shared location",
            Coordinates { latitude: -23.55052, longitude: -46.633308 },
        );
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["type"], "location");
        assert_eq!(json["metadata"]["latitude"], -23.55052);
        assert_eq!(json["metadata"]["longitude"], -46.633308);
    }

    /// **Test: image envelope carries camelCase file metadata.**
    #[test]
    fn test_attachment_envelope_wire_shape() {
        let envelope = OutboundEnvelope::attachment(
            "session-1",
            "File sent: photo.png",
            PayloadKind::Image,
            FileMetadata {
                file_name: "photo.png".into(),
                file_type: "image/png".into(),
                file_size: 2048,
                base64_data: "QUJD".into(),
            },
        );
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["metadata"]["fileName"], "photo.png");
        assert_eq!(json["metadata"]["fileType"], "image/png");
        assert_eq!(json["metadata"]["fileSize"], 2048);
        assert_eq!(json["metadata"]["base64Data"], "QUJD");
    }
}
