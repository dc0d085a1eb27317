//! # hookchat-conversation
//!
//! The conversation model and its controller: an append-only, time-ordered
//! message sequence, and the mediation between user actions, the webhook
//! transport, and platform collaborators (geolocation, file intake, user
//! notifications).

pub mod controller;
pub mod conversation;
pub mod platform;
pub mod upload;

pub use controller::{ChatController, AUDIO_MESSAGE_LABEL, DEFAULT_REPLY_PACING, WAITING_TEXT};
pub use conversation::{Conversation, WELCOME_TEXT};
pub use platform::{LocationError, LocationProvider, Notifier};
pub use upload::{FileUpload, UploadKind, MAX_FILE_SIZE};
