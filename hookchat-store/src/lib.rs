//! # hookchat-store
//!
//! Durable client-side state: a SQLite-backed [`KeyValueStore`] holding the
//! session identifier and the preferred-voice name, the session-identity
//! provider, and an in-memory store for tests and ephemeral use.
//!
//! The conversation itself is never persisted; only these two string keys are.

pub mod kv_store;
pub mod memory_store;
pub mod session;
pub mod sqlite_pool;
pub mod voice;

pub use hookchat_core::KeyValueStore;
pub use kv_store::SqliteKvStore;
pub use memory_store::MemoryKvStore;
pub use session::load_or_create_session_id;
pub use sqlite_pool::SqlitePoolManager;
pub use voice::{get_preferred_voice, set_preferred_voice};
