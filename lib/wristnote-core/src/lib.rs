use crate::error::NotifyError;
use crate::event_loop::EventLoop;
use crate::platform::{EventBridge, PlatformError, Services};

pub mod click_bridge;
pub mod command;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod notification_manager;
pub mod overlay;
pub mod paths;
pub mod platform;
pub mod timer;

pub use config::Config;
pub use notification_manager::NotificationManager;

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

/// Runs a notification session on the current thread until a `Shutdown` event arrives.
pub fn start(config: Config, bridge: EventBridge, services: Services) -> WristnoteResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Could not start runtime: {e}"))?;

    runtime.block_on(async {
        let manager = NotificationManager::init(config, services)?;
        EventLoop::run(bridge, manager).await;
        Ok::<(), WristnoteFatalError>(())
    })
}

#[derive(Debug)]
pub enum WristnoteFatalError {
    Error(String),
    PlatformError(PlatformError),
    NotifyError(NotifyError),
}

pub type WristnoteResult<T> = Result<T, WristnoteFatalError>;

impl std::fmt::Display for WristnoteFatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WristnoteFatalError::Error(message) => write!(f, "{message}"),
            WristnoteFatalError::PlatformError(error) => write!(f, "{error}"),
            WristnoteFatalError::NotifyError(error) => write!(f, "{error}"),
        }
    }
}

impl From<PlatformError> for WristnoteFatalError {
    fn from(error: PlatformError) -> Self {
        WristnoteFatalError::PlatformError(error)
    }
}

impl From<NotifyError> for WristnoteFatalError {
    fn from(error: NotifyError) -> Self {
        WristnoteFatalError::NotifyError(error)
    }
}

impl From<&str> for WristnoteFatalError {
    fn from(value: &str) -> Self {
        WristnoteFatalError::Error(value.to_owned())
    }
}

impl From<String> for WristnoteFatalError {
    fn from(error: String) -> Self {
        WristnoteFatalError::Error(error)
    }
}

impl From<Box<dyn std::error::Error>> for WristnoteFatalError {
    fn from(error: Box<dyn std::error::Error>) -> Self {
        WristnoteFatalError::Error(error.to_string())
    }
}
