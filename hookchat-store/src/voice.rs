//! Preferred speech-synthesis voice, stored as a plain string.

use hookchat_core::{KeyValueStore, Result, PREFERRED_VOICE_KEY};

/// Returns the stored voice name, or None when the user never picked one.
pub async fn get_preferred_voice(store: &dyn KeyValueStore) -> Result<Option<String>> {
    store.get(PREFERRED_VOICE_KEY).await
}

/// Persists the voice name for later sessions.
pub async fn set_preferred_voice(store: &dyn KeyValueStore, voice_name: &str) -> Result<()> {
    store.set(PREFERRED_VOICE_KEY, voice_name).await
}
