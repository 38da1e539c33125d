use crate::click_bridge::ClickDisposition;
use crate::config::Config;
use crate::error::{NotifyError, NotifyResult};
use crate::overlay::overlays::{BatteryNotification, MessageNotification, MiniMessageNotification};
use crate::overlay::{
    DismissReason, LifecycleState, OverlayLifecycle, ShowRequest, Timeout, VariantPayload,
};
use crate::platform::{
    AlarmId, Button, NotificationId, NotifyEvent, OverlayId, Rect, Services, TimerId, WindowId,
};
use log::{debug, error, info, warn};

/// Entry point for everything that wants to put a notification on screen. One instance lives
/// for the length of a UI session and owns the overlay lifecycle and its collaborators.
pub struct NotificationManager {
    config: Config,
    services: Services,
    lifecycle: OverlayLifecycle,
}

impl NotificationManager {
    pub fn init(config: Config, services: Services) -> NotifyResult<Self> {
        config.validate().map_err(NotifyError::InvalidInput)?;
        info!(
            "Notifications ready (rearm {}ms, small message {}ms)",
            config.rearm_timeout_ms, config.mini_message_timeout_ms
        );
        Ok(Self {
            lifecycle: OverlayLifecycle::new(config.rearm_timeout_ms),
            config,
            services,
        })
    }

    /// Shows the stored message `id` full screen, or swaps it in if a message is already up.
    pub fn arrived(&mut self, id: NotificationId) {
        let result = self.request_message(id);
        Self::report(result);
    }

    fn request_message(&mut self, id: NotificationId) -> NotifyResult<()> {
        if id.is_nil() {
            return Err(NotifyError::InvalidInput("nil notification id".to_string()));
        }
        let content = self
            .services
            .messages
            .lookup(&id)
            .map_err(|_| NotifyError::ContentNotFound(id))?;

        self.show(
            VariantPayload::Message(MessageNotification::stored(id, content)),
            Timeout::Default(self.config.message_timeout_ms),
        )
    }

    /// Shows the battery status. A `timeout_ms` of 0 keeps it up until dismissed.
    pub fn show_battery(&mut self, timeout_ms: u32) {
        let result = self.show(
            VariantPayload::Battery(BatteryNotification::new()),
            Timeout::Explicit(timeout_ms),
        );
        Self::report(result);
    }

    /// Shows a small boxed message in `frame` with the default timeout.
    pub fn show_small_message(&mut self, text: &str, frame: Rect) {
        let result = self.request_small_message(text, frame, None);
        Self::report(result);
    }

    pub fn show_small_message_with_timeout(&mut self, text: &str, frame: Rect, timeout_ms: u32) {
        let result = self.request_small_message(text, frame, Some(timeout_ms));
        Self::report(result);
    }

    fn request_small_message(
        &mut self,
        text: &str,
        frame: Rect,
        timeout_ms: Option<u32>,
    ) -> NotifyResult<()> {
        if text.trim().is_empty() {
            return Err(NotifyError::InvalidInput("empty message text".to_string()));
        }
        if frame.is_empty() {
            return Err(NotifyError::InvalidInput(format!("empty frame {frame}")));
        }

        let timeout = match timeout_ms {
            Some(ms) => Timeout::Explicit(ms),
            None => Timeout::Default(self.config.mini_message_timeout_ms),
        };
        let payload = MiniMessageNotification::new(
            text,
            self.config.mini_message_icon,
            frame,
            self.config.max_message_len,
        );
        self.show(VariantPayload::MiniMessage(payload), timeout)
    }

    pub fn show_incoming_call(&mut self, caller: &str) {
        let result = if caller.trim().is_empty() {
            Err(NotifyError::InvalidInput("empty caller".to_string()))
        } else {
            self.show(
                VariantPayload::Message(MessageNotification::incoming_call(caller)),
                Timeout::Default(self.config.call_timeout_ms),
            )
        };
        Self::report(result);
    }

    pub fn show_alarm(&mut self, alarm_id: AlarmId) {
        let result = self.show(
            VariantPayload::Message(MessageNotification::alarm(alarm_id)),
            Timeout::Default(self.config.alarm_timeout_ms),
        );
        Self::report(result);
    }

    /// Closes whatever overlay is up. Does nothing when idle.
    pub fn dismiss(&mut self) {
        self.lifecycle
            .dismiss(&mut self.services, DismissReason::Dismissed);
    }

    /// Sets the application window whose buttons get overridden while an overlay is up.
    pub fn load_click_config(&mut self, app_window: WindowId) {
        self.lifecycle
            .load_click_config(app_window, &mut self.services);
    }

    pub fn handle_button(&mut self, button: Button) -> ClickDisposition {
        self.lifecycle
            .handle_button(button, &mut self.services)
            .disposition
    }

    pub fn timer_expired(&mut self, id: TimerId) {
        self.lifecycle.timer_expired(id, &mut self.services);
    }

    /// Applies one event from the event loop.
    pub fn handle_event(&mut self, event: NotifyEvent) {
        match event {
            NotifyEvent::Arrived(id) => self.arrived(id),
            NotifyEvent::ShowBattery { timeout_ms } => self.show_battery(timeout_ms),
            NotifyEvent::ShowSmallMessage {
                text,
                frame,
                timeout_ms: Some(timeout_ms),
            } => self.show_small_message_with_timeout(&text, frame, timeout_ms),
            NotifyEvent::ShowSmallMessage {
                text,
                frame,
                timeout_ms: None,
            } => self.show_small_message(&text, frame),
            NotifyEvent::ShowIncomingCall { caller } => self.show_incoming_call(&caller),
            NotifyEvent::ShowAlarm(alarm_id) => self.show_alarm(alarm_id),
            NotifyEvent::Dismiss => self.dismiss(),
            NotifyEvent::LoadClickConfig(window) => self.load_click_config(window),
            NotifyEvent::Button(button) => {
                if self.handle_button(button) == ClickDisposition::Forward {
                    debug!("{button:?} forwarded to the application");
                }
            }
            NotifyEvent::TimerExpired(id) => self.timer_expired(id),
            NotifyEvent::Shutdown => self.shutdown(),
        }
    }

    /// Ends the session, tearing down any overlay still up.
    pub fn shutdown(&mut self) {
        self.lifecycle.dismiss(&mut self.services, DismissReason::Shutdown);
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn lifecycle(&self) -> &OverlayLifecycle {
        &self.lifecycle
    }

    pub fn overlay_id(&self) -> Option<OverlayId> {
        self.lifecycle.overlay_id()
    }

    pub fn timer_id(&self) -> Option<TimerId> {
        self.lifecycle.timer_id()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn show(&mut self, payload: VariantPayload, timeout: Timeout) -> NotifyResult<()> {
        self.lifecycle
            .show(ShowRequest::new(payload, timeout), &mut self.services)
    }

    fn report(result: NotifyResult<()>) {
        match result {
            Ok(()) => {}
            Err(e @ NotifyError::OverlayCreationFailed(_)) => error!("{e}"),
            Err(e @ NotifyError::TimerScheduleFailed(_)) => warn!("{e}"),
            Err(e @ (NotifyError::ContentNotFound(_) | NotifyError::InvalidInput(_))) => {
                debug!("Ignoring notification request: {e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockWorld;
    use crate::platform::MessageContent;
    use uuid::Uuid;

    fn manager(world: &MockWorld) -> NotificationManager {
        NotificationManager::init(Config::default(), world.services()).unwrap()
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let world = MockWorld::new();
        let config = Config {
            rearm_timeout_ms: 0,
            ..Default::default()
        };

        let result = NotificationManager::init(config, world.services());
        assert!(matches!(result, Err(NotifyError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_message_is_ignored() {
        let world = MockWorld::new();
        let mut manager = manager(&world);
        manager.show_battery(0);

        manager.arrived(Uuid::new_v4());

        assert_eq!(manager.state(), LifecycleState::BatteryActive);
        assert_eq!(world.live_overlays(), 1);
    }

    #[test]
    fn test_nil_id_is_rejected_before_lookup() {
        let world = MockWorld::new();
        world.add_message(Uuid::nil(), MessageContent::new("Ana", "Hi"));
        let mut manager = manager(&world);

        manager.arrived(Uuid::nil());

        assert_eq!(manager.state(), LifecycleState::Idle);
        assert!(world.journal().is_empty());
    }

    #[test]
    fn test_malformed_small_message_is_rejected() {
        let world = MockWorld::new();
        let mut manager = manager(&world);

        manager.show_small_message("", Rect::new(0, 0, 100, 50));
        manager.show_small_message(" \t ", Rect::new(0, 0, 100, 50));
        manager.show_small_message("Hi", Rect::new(0, 0, 0, 50));
        manager.show_small_message("Hi", Rect::new(0, 0, 100, 0));

        assert_eq!(manager.state(), LifecycleState::Idle);
        assert!(world.journal().is_empty());
    }

    #[test]
    fn test_incoming_call_and_alarm_share_message_variant() {
        let world = MockWorld::new();
        let mut manager = manager(&world);

        manager.show_incoming_call("Mum");
        let overlay = manager.overlay_id();
        assert_eq!(manager.state(), LifecycleState::MessageActive);
        // Calls stay up until answered or dismissed
        assert_eq!(manager.timer_id(), None);

        manager.show_alarm(2);
        assert_eq!(manager.state(), LifecycleState::MessageActive);
        assert_eq!(manager.overlay_id(), overlay);

        manager.show_incoming_call("   ");
        assert_eq!(manager.state(), LifecycleState::MessageActive);
    }

    #[test]
    fn test_handle_event_routes_requests() {
        let world = MockWorld::new();
        let mut manager = manager(&world);

        manager.handle_event(NotifyEvent::ShowSmallMessage {
            text: "Hi".to_string(),
            frame: Rect::new(0, 0, 100, 50),
            timeout_ms: None,
        });
        assert_eq!(manager.state(), LifecycleState::MiniMessageActive);
        assert_eq!(manager.lifecycle().timeout_ms(), Some(5000));

        manager.handle_event(NotifyEvent::Button(Button::Select));
        assert_eq!(manager.state(), LifecycleState::Idle);

        manager.handle_event(NotifyEvent::ShowBattery { timeout_ms: 0 });
        manager.handle_event(NotifyEvent::Shutdown);
        assert_eq!(manager.state(), LifecycleState::Idle);
        assert_eq!(world.live_overlays(), 0);
    }

    #[test]
    fn test_buttons_forwarded_while_idle() {
        let world = MockWorld::new();
        let mut manager = manager(&world);

        assert_eq!(manager.handle_button(Button::Select), ClickDisposition::Forward);

        manager.show_battery(1000);
        assert_eq!(manager.handle_button(Button::Select), ClickDisposition::Absorbed);
    }
}
