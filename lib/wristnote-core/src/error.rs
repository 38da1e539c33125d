use crate::platform::{NotificationId, PlatformError};
use thiserror::Error;

/// Recoverable failures of a notification request. None of them are surfaced to the wearer;
/// the controller logs them and stays in a consistent state.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Could not create overlay: {0}")]
    OverlayCreationFailed(PlatformError),
    #[error("No content for notification {0}")]
    ContentNotFound(NotificationId),
    #[error("Could not schedule auto-dismiss timer: {0}")]
    TimerScheduleFailed(PlatformError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type NotifyResult<T> = Result<T, NotifyError>;
