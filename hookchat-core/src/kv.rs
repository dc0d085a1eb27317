//! Key-value store abstraction for durable client-side state.
//!
//! Holds only simple string values under fixed keys (session identifier,
//! preferred voice). Injected wherever durable state is read so tests can
//! substitute an in-memory fake.

use async_trait::async_trait;

use crate::error::Result;

/// Key under which the per-profile session identifier is stored.
pub const SESSION_ID_KEY: &str = "chatbot-session-id";

/// Key under which the preferred speech-synthesis voice name is stored.
pub const PREFERRED_VOICE_KEY: &str = "chatbot-preferred-voice";

/// Durable string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value for `key`, or None if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
