//! Terminal implementations of the platform collaborator traits.

use async_trait::async_trait;
use hookchat_core::Coordinates;
use hookchat_conversation::{LocationError, LocationProvider, Notifier};

/// Location source for a process with no GPS: reads `HOOKCHAT_LAT` and
/// `HOOKCHAT_LON` from the environment, else reports the position as
/// unavailable.
pub struct EnvLocationProvider;

#[async_trait]
impl LocationProvider for EnvLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let latitude = std::env::var("HOOKCHAT_LAT")
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok());
        let longitude = std::env::var("HOOKCHAT_LON")
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok());

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(LocationError::PositionUnavailable),
        }
    }
}

/// Notifications go to stderr so they stay out of the conversation stream on
/// stdout.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, title: &str, detail: &str) {
        eprintln!("! {}: {}", title, detail);
    }
}
