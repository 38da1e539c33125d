use crate::overlay::{OverlayScene, OverlayWindowConfig};
use crate::platform::{
    BatteryState, MessageContent, NotificationId, OverlayId, PlatformResult, Rect, TimerId,
    WindowId,
};

/// The window stack. Overlays it hands out sit above the current application window until
/// destroyed.
pub trait OverlayService {
    /// Creates an overlay window. Nothing is visible until the first `render`. Fails with
    /// `ResourceExhausted` when the compositor is out of windows.
    fn create(&mut self, config: &OverlayWindowConfig) -> PlatformResult<OverlayId>;

    fn render(&mut self, id: OverlayId, scene: &OverlayScene) -> PlatformResult<()>;

    fn move_to(&mut self, id: OverlayId, frame: &Rect) -> PlatformResult<()>;

    /// Destroying an unknown id must be a no-op.
    fn destroy(&mut self, id: OverlayId);
}

/// One-shot timers. Expiry is reported back through the event loop as
/// `NotifyEvent::TimerExpired` carrying the id returned here.
pub trait TimerService {
    fn schedule(&mut self, timeout_ms: u32) -> PlatformResult<TimerId>;

    /// Cancelling an unknown or already fired timer must be a no-op.
    fn cancel(&mut self, id: TimerId);
}

pub trait MessageStore {
    fn lookup(&self, id: &NotificationId) -> PlatformResult<MessageContent>;
}

/// Overrides the click handling of the running application window.
pub trait ClickConfigService {
    fn bind(&mut self, window: WindowId);
    fn unbind(&mut self, window: WindowId);
}

pub trait BatteryMonitor {
    fn state(&self) -> BatteryState;
}
