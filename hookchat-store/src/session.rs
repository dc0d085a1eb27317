//! Session-identity provider.
//!
//! Derives a durable per-profile session identifier on first use and returns
//! the persisted value unchanged on every later load. The identifier is an
//! opaque correlation token sent with every outbound envelope; no rotation,
//! no server-side validation.

use chrono::Utc;
use hookchat_core::{KeyValueStore, Result, SESSION_ID_KEY};
use rand::Rng;
use tracing::info;

const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Builds a fresh identifier: `session-{unix_millis}-{random suffix}`.
fn new_session_id() -> String {
    format!(
        "session-{}-{}",
        Utc::now().timestamp_millis(),
        random_suffix(SUFFIX_LEN)
    )
}

/// Returns the stored session identifier, generating and persisting one on
/// first use.
pub async fn load_or_create_session_id(store: &dyn KeyValueStore) -> Result<String> {
    if let Some(existing) = store.get(SESSION_ID_KEY).await? {
        return Ok(existing);
    }

    let session_id = new_session_id();
    store.set(SESSION_ID_KEY, &session_id).await?;
    info!(session_id = %session_id, "Created new session identifier");
    Ok(session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: generated identifiers have the session-millis-suffix shape and differ between calls.**
    #[test]
    fn test_new_session_id_shape() {
        let id = new_session_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "session");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2].bytes().all(|b| SUFFIX_CHARSET.contains(&b)));

        assert_ne!(new_session_id(), new_session_id());
    }

    /// **Test: the provider works through any KeyValueStore, the in-memory one included.**
    #[tokio::test]
    async fn test_load_or_create_with_memory_store() {
        let store = crate::MemoryKvStore::new();
        let first = load_or_create_session_id(&store).await.unwrap();
        let second = load_or_create_session_id(&store).await.unwrap();
        assert_eq!(first, second);
    }
}
