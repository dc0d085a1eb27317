//! Conversation controller: user actions in, paced bot replies out.
//!
//! Mediates between the UI's operations, the [`ReplyTransport`], and the
//! [`Conversation`]. One dispatch is outstanding at a time per controller
//! (`&mut self`); nothing coordinates dispatches across controllers.

use std::sync::Arc;
use std::time::Duration;

use hookchat_core::{
    Attachment, InboundItem, Message, OutboundEnvelope, PayloadKind, ReplyTransport, Sender,
};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::conversation::Conversation;
use crate::platform::{LocationProvider, Notifier};
use crate::upload::{FileUpload, UploadKind, MAX_FILE_SIZE};

/// Copy of the transient placeholder shown while a dispatch is in flight.
pub const WAITING_TEXT: &str = "Thinking...";

/// Display label for bot audio messages; the payload rides alongside for replay.
pub const AUDIO_MESSAGE_LABEL: &str = "🔊 Audio message";

/// Pause between appended items of one multi-part reply.
pub const DEFAULT_REPLY_PACING: Duration = Duration::from_millis(500);

pub struct ChatController {
    session_id: String,
    conversation: Conversation,
    transport: Arc<dyn ReplyTransport>,
    location: Arc<dyn LocationProvider>,
    notifier: Arc<dyn Notifier>,
    reply_pacing: Duration,
}

impl ChatController {
    pub fn new(
        session_id: impl Into<String>,
        transport: Arc<dyn ReplyTransport>,
        location: Arc<dyn LocationProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            conversation: Conversation::new(),
            transport,
            location,
            notifier,
            reply_pacing: DEFAULT_REPLY_PACING,
        }
    }

    /// Replaces the inter-item pacing (tests use zero).
    pub fn with_reply_pacing(mut self, pacing: Duration) -> Self {
        self.reply_pacing = pacing;
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Appends the user's text message and relays it. Blank input is a no-op.
    pub async fn send_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.conversation.push(Message::text(Sender::User, text));
        let envelope = OutboundEnvelope::text(&self.session_id, text);
        self.dispatch(envelope).await;
    }

    /// Reads the position once; on success appends a location message and
    /// relays it, on failure surfaces the reason and appends nothing.
    pub async fn share_location(&mut self) {
        let coordinates = match self.location.current_position().await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                warn!(error = %e, "Geolocation failed");
                self.notifier.notify("Location error", e.user_copy());
                return;
            }
        };

        let label = format!(
            "📍 Location shared: {:.6}, {:.6}",
            coordinates.latitude, coordinates.longitude
        );
        self.conversation
            .push(Message::location(Sender::User, label, coordinates));

        let envelope =
            OutboundEnvelope::location(&self.session_id, "User shared location", coordinates);
        self.dispatch(envelope).await;
    }

    /// Validates and relays a picked file. Oversized files are rejected up
    /// front: no message is appended and no request is made.
    pub async fn attach_file(&mut self, upload: FileUpload, kind: UploadKind) {
        if upload.byte_size() > MAX_FILE_SIZE {
            warn!(
                file_name = %upload.file_name,
                byte_size = upload.byte_size(),
                "Rejected oversized attachment"
            );
            self.notifier
                .notify("File too large", "The file must be 10MB or smaller.");
            return;
        }

        let label = upload.label();
        let attachment = Attachment {
            file_name: upload.file_name.clone(),
            mime_type: upload.mime_type.clone(),
            byte_size: upload.byte_size(),
            local_path: upload.local_path.clone(),
        };
        let message = match kind.payload_kind() {
            PayloadKind::Image => Message::image(Sender::User, label, attachment),
            _ => Message::file(Sender::User, label, attachment),
        };
        self.conversation.push(message);

        let content = format!("File sent: {}", upload.file_name);
        let envelope = OutboundEnvelope::attachment(
            &self.session_id,
            content,
            kind.payload_kind(),
            upload.to_metadata(),
        );
        self.dispatch(envelope).await;
    }

    /// Shows the waiting placeholder, relays the envelope, removes the
    /// placeholder whatever the outcome, then appends the reply items in
    /// order (paced) or exactly one error message.
    async fn dispatch(&mut self, envelope: OutboundEnvelope) {
        let waiting_id = self
            .conversation
            .push(Message::text(Sender::Bot, WAITING_TEXT))
            .id
            .clone();

        let outcome = self.transport.send(&envelope).await;

        self.conversation.remove(&waiting_id);

        match outcome {
            Ok(items) => {
                info!(item_count = items.len(), "Webhook reply normalized");
                for (index, item) in items.into_iter().enumerate() {
                    if index > 0 {
                        sleep(self.reply_pacing).await;
                    }
                    let message = match item {
                        InboundItem::Text(text) => Message::text(Sender::Bot, text),
                        InboundItem::Audio(payload) => {
                            Message::audio(Sender::Bot, AUDIO_MESSAGE_LABEL, payload)
                        }
                    };
                    debug!(kind = ?message.kind, "Appending bot reply item");
                    self.conversation.push(message);
                }
            }
            Err(e) => {
                warn!(error = %e, "Webhook dispatch failed");
                let copy = e.user_copy();
                self.notifier.notify("Communication error", copy);
                self.conversation.push(Message::text(Sender::Bot, copy));
            }
        }
    }
}
