//! Error types for the hookchat client.
//!
//! [`WebhookError`] classifies a single webhook request/response cycle;
//! [`ChatError`] is the top-level error for everything else.

use thiserror::Error;

/// Top-level error for hookchat (store, transport, config, IO).
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure kinds for one webhook request/response cycle.
///
/// Exactly one of these is produced per failed call; the caller never sees a
/// partial reply. `Timeout` and `Transport` are kept distinct so a slow
/// endpoint is not reported as a broken one.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The configured wait bound expired before the reply was read.
    #[error("Request timed out")]
    Timeout,

    /// The reply body was empty or whitespace, or normalized to zero items.
    #[error("Empty reply from webhook")]
    EmptyReply,

    /// The reply body was non-empty but not parseable JSON, or a shape the
    /// normalizer does not accept.
    #[error("Invalid JSON in webhook reply: {0}")]
    InvalidJson(String),

    /// Non-success HTTP status from the webhook.
    #[error("Webhook returned HTTP status {status}")]
    Transport { status: u16 },

    /// Network-level failure (connect, DNS, reading the body).
    #[error("Network error: {0}")]
    Network(String),
}

impl WebhookError {
    /// User-facing summary for this failure kind. Shown as a notification and
    /// appended to the conversation as a bot message.
    pub fn user_copy(&self) -> &'static str {
        match self {
            WebhookError::Timeout => {
                "The request is taking longer than expected. Please wait a moment and try again."
            }
            WebhookError::EmptyReply => {
                "Communication error: the server sent an empty reply. Please try again shortly."
            }
            WebhookError::InvalidJson(_) => {
                "A technical error occurred while processing the reply. Please try again."
            }
            WebhookError::Transport { .. } | WebhookError::Network(_) => {
                "Could not send your message. Please try again."
            }
        }
    }
}

/// Result type for core operations; uses [`ChatError`].
pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: each failure kind maps to its own user copy; transport and network share the generic one.**
    #[test]
    fn test_user_copy_mapping() {
        assert!(WebhookError::Timeout.user_copy().contains("longer than expected"));
        assert!(WebhookError::EmptyReply.user_copy().contains("empty reply"));
        assert!(WebhookError::InvalidJson("x".into())
            .user_copy()
            .contains("technical error"));
        assert_eq!(
            WebhookError::Transport { status: 500 }.user_copy(),
            WebhookError::Network("connect refused".into()).user_copy()
        );
    }
}
