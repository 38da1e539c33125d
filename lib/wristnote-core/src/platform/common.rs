use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::fmt::{self, Display};
use uuid::Uuid;

#[derive(Debug)]
pub struct PlatformError {
    pub error_type: PlatformErrorType,
    pub backtrace: Backtrace,
}

#[derive(Debug)]
pub enum PlatformErrorType {
    Unknown,
    /// The compositor could not allocate another window
    ResourceExhausted,
    /// The timer service refused to schedule
    ScheduleFailed,
    /// A lookup key had no entry
    NotFound,
    Error(String),
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_type {
            PlatformErrorType::Unknown => write!(f, "unknown platform error"),
            PlatformErrorType::ResourceExhausted => write!(f, "resource exhausted"),
            PlatformErrorType::ScheduleFailed => write!(f, "could not schedule timer"),
            PlatformErrorType::NotFound => write!(f, "not found"),
            PlatformErrorType::Error(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<PlatformErrorType> for PlatformError {
    fn from(error_type: PlatformErrorType) -> Self {
        Self {
            error_type,
            backtrace: Backtrace::capture(),
        }
    }
}

impl From<&str> for PlatformError {
    fn from(error: &str) -> Self {
        PlatformErrorType::Error(error.to_string()).into()
    }
}

impl From<String> for PlatformError {
    fn from(error: String) -> Self {
        PlatformErrorType::Error(error).into()
    }
}

pub type PlatformResult<T> = Result<T, PlatformError>;

pub type OverlayId = u64;
pub type TimerId = u64;
pub type WindowId = u64;
pub type IconId = u16;
pub type AlarmId = u8;

/// Unique key of a stored notification message
pub type NotificationId = Uuid;

/// Placement of an overlay on the watch display, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{},{}", self.width, self.height, self.x, self.y)
    }
}

/// The four hardware buttons of the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Back,
    Up,
    Select,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryState {
    pub percent: u8,
    pub charging: bool,
    pub plugged: bool,
}

/// What the message store holds for a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MessageContent {
    pub sender: String,
    pub subject: Option<String>,
    pub body: String,
    pub app_name: Option<String>,
    pub icon: IconId,
}

impl MessageContent {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}
