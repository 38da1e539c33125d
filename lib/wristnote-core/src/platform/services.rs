use crate::platform::{
    BatteryMonitor, ClickConfigService, MessageStore, OverlayService, TimerService,
};

/// The external collaborators a notification session talks to. Owned by the
/// `NotificationManager` for the lifetime of the session.
pub struct Services {
    pub overlays: Box<dyn OverlayService>,
    pub timers: Box<dyn TimerService>,
    pub messages: Box<dyn MessageStore>,
    pub clicks: Box<dyn ClickConfigService>,
    pub battery: Box<dyn BatteryMonitor>,
}
