use crate::click_bridge::{BridgeEvent, ClickOutcome, ClickRearmBridge};
use crate::error::{NotifyError, NotifyResult};
use crate::overlay::content::DisplayEnv;
use crate::overlay::handle::Overlay;
use crate::overlay::payload::{ShowRequest, VariantPayload};
use crate::overlay::{LifecycleState, VariantKind};
use crate::platform::{Button, OverlayId, Services, TimerId, WindowId};
use crate::timer::TimerBinding;
use log::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Dismissed,
    Expired,
    Back,
    Replaced,
    Shutdown,
}

/// Everything that only exists while a variant is up.
#[derive(Debug)]
struct ActiveNotification {
    payload: VariantPayload,
    overlay: Overlay,
    timer: TimerBinding,
    timeout_ms: u32,
}

impl ActiveNotification {
    fn kind(&self) -> VariantKind {
        self.payload.kind()
    }

    fn redisplay(&mut self, services: &mut Services) {
        let env = DisplayEnv {
            battery: services.battery.as_ref(),
        };
        let scene = self.payload.content_mut().display(&env);
        if let Err(e) = self.overlay.render(services.overlays.as_mut(), &scene) {
            warn!("Could not render overlay {}: {e}", self.overlay.id());
        }
    }

    fn arm(&mut self, services: &mut Services, timeout_ms: u32) {
        if let Err(e) = self.timer.schedule(services.timers.as_mut(), timeout_ms) {
            warn!("{e}, {:?} overlay will stay up until dismissed", self.kind());
        }
    }
}

/// Holds at most one notification overlay and moves it between states. All transitions run
/// to completion before returning.
#[derive(Debug)]
pub struct OverlayLifecycle {
    active: Option<ActiveNotification>,
    clicks: ClickRearmBridge,
    rearm_timeout_ms: u32,
}

impl OverlayLifecycle {
    pub fn new(rearm_timeout_ms: u32) -> Self {
        Self {
            active: None,
            clicks: ClickRearmBridge::new(),
            rearm_timeout_ms,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.active_kind().into()
    }

    pub fn active_kind(&self) -> Option<VariantKind> {
        self.active.as_ref().map(ActiveNotification::kind)
    }

    pub fn active_payload(&self) -> Option<&VariantPayload> {
        self.active.as_ref().map(|active| &active.payload)
    }

    pub fn overlay_id(&self) -> Option<OverlayId> {
        self.active.as_ref().map(|active| active.overlay.id())
    }

    pub fn timer_id(&self) -> Option<TimerId> {
        self.active.as_ref().and_then(|active| active.timer.handle())
    }

    pub fn timeout_ms(&self) -> Option<u32> {
        self.active.as_ref().map(|active| active.timeout_ms)
    }

    pub fn click_bridge(&self) -> &ClickRearmBridge {
        &self.clicks
    }

    /// Shows the requested variant. The same variant is refreshed in place; a different one
    /// replaces the current overlay, tearing it down first.
    pub fn show(&mut self, request: ShowRequest, services: &mut Services) -> NotifyResult<()> {
        let ShowRequest { payload, timeout } = request;

        let payload = match self.active.as_mut() {
            Some(active) => match active.payload.refresh(payload) {
                Ok(refresh) => {
                    if let Some(frame) = refresh.moved_to {
                        if let Err(e) = active.overlay.move_to(services.overlays.as_mut(), &frame)
                        {
                            warn!("Could not move overlay {}: {e}", active.overlay.id());
                        }
                    }
                    active.redisplay(services);
                    if let Some(timeout_ms) = timeout.on_refresh() {
                        active.timeout_ms = timeout_ms;
                        active.arm(services, timeout_ms);
                    }
                    trace!("Refreshed {:?} overlay {}", active.kind(), active.overlay.id());
                    return Ok(());
                }
                Err(payload) => payload,
            },
            None => payload,
        };

        self.teardown(services, DismissReason::Replaced);
        self.activate(payload, timeout.ms(), services)
    }

    fn activate(
        &mut self,
        mut payload: VariantPayload,
        timeout_ms: u32,
        services: &mut Services,
    ) -> NotifyResult<()> {
        let config = payload.content().config();
        let overlay = match Overlay::create(services.overlays.as_mut(), &config) {
            Ok(overlay) => overlay,
            Err(e) => {
                payload.content_mut().destroy();
                return Err(NotifyError::OverlayCreationFailed(e));
            }
        };
        payload.content_mut().create(&overlay);

        let mut active = ActiveNotification {
            payload,
            overlay,
            timer: TimerBinding::new(),
            timeout_ms,
        };
        active.redisplay(services);
        if timeout_ms != 0 {
            active.arm(services, timeout_ms);
        }
        self.clicks.bind(services.clicks.as_mut());

        info!(
            "Showing {:?} overlay {} (timeout {}ms)",
            active.kind(),
            active.overlay.id(),
            timeout_ms
        );
        self.active = Some(active);
        Ok(())
    }

    /// Tears down the active overlay. A no-op while idle.
    pub fn dismiss(&mut self, services: &mut Services, reason: DismissReason) {
        self.teardown(services, reason);
    }

    fn teardown(&mut self, services: &mut Services, reason: DismissReason) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        let kind = active.kind();
        let id = active.overlay.id();

        active.payload.content_mut().destroy();
        active.timer.cancel(services.timers.as_mut());
        active.overlay.destroy(services.overlays.as_mut());
        self.clicks.unbind(services.clicks.as_mut());

        info!("Dismissed {kind:?} overlay {id} ({reason:?})");
    }

    /// Handles an auto-dismiss expiry. Expiries of cancelled or replaced timers are ignored.
    pub fn timer_expired(&mut self, id: TimerId, services: &mut Services) {
        let current = self
            .active
            .as_mut()
            .is_some_and(|active| active.timer.expire(id));
        if !current {
            trace!("Ignoring stale timer {id}");
            return;
        }
        self.teardown(services, DismissReason::Expired);
    }

    /// Sets the application window to override. An overlay already up gets the override
    /// straight away.
    pub fn load_click_config(&mut self, window: WindowId, services: &mut Services) {
        self.clicks.load(window, services.clicks.as_mut());
        if self.active.is_some() {
            self.clicks.bind(services.clicks.as_mut());
        }
    }

    /// Routes a button press through the click bridge and applies the resulting requests.
    pub fn handle_button(&mut self, button: Button, services: &mut Services) -> ClickOutcome {
        let outcome = self.clicks.route(self.active_kind(), button);
        for event in &outcome.events {
            self.handle_bridge_event(*event, services);
        }
        outcome
    }

    pub fn handle_bridge_event(&mut self, event: BridgeEvent, services: &mut Services) {
        match event {
            BridgeEvent::Dismiss => self.teardown(services, DismissReason::Back),
            BridgeEvent::Rearm => self.rearm(services),
            BridgeEvent::Scroll(direction) => {
                if let Some(active) = self.active.as_mut() {
                    if active.payload.scroll(direction) {
                        active.redisplay(services);
                    }
                }
            }
        }
    }

    /// Restarts the auto-dismiss countdown with the full rearm duration. Overlays shown
    /// without a timeout stay that way.
    fn rearm(&mut self, services: &mut Services) {
        let rearm_timeout_ms = self.rearm_timeout_ms;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.timeout_ms == 0 {
            return;
        }
        active.arm(services, rearm_timeout_ms);
        debug!(
            "Rearmed {:?} overlay {} for {}ms",
            active.kind(),
            active.overlay.id(),
            rearm_timeout_ms
        );
    }
}
