//! Platform collaborator seams: geolocation and user notifications.
//!
//! The real widget surface wires these to platform APIs; tests and the REPL
//! substitute their own implementations.

use async_trait::async_trait;
use hookchat_core::Coordinates;
use thiserror::Error;

/// Failure reasons for a one-shot geolocation read: the three standard
/// platform error codes plus the platform-absent case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Timed out acquiring position")]
    Timeout,

    #[error("Geolocation not supported")]
    Unsupported,
}

impl LocationError {
    /// User-facing reason, one per failure code.
    pub fn user_copy(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => {
                "Location permission was denied. Check your permissions and try again."
            }
            LocationError::PositionUnavailable => {
                "Your position is currently unavailable. Try again later."
            }
            LocationError::Timeout => "Timed out while acquiring your location. Please try again.",
            LocationError::Unsupported => "Location sharing is not supported on this device.",
        }
    }
}

/// One-shot position source.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Transient user-facing notification surface (a toast in a widget, stderr in
/// the REPL). Distinct from the conversation itself: notifications are not
/// messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, detail: &str);
}
