use crate::overlay::overlays::ScrollDirection;
use crate::overlay::VariantKind;
use crate::platform::{Button, ClickConfigService, WindowId};
use log::{debug, trace};

/// Requests the bridge sends to the lifecycle in response to a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeEvent {
    Rearm,
    Dismiss,
    Scroll(ScrollDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// No overlay is up; the application window handles the press
    Forward,
    Absorbed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    pub disposition: ClickDisposition,
    pub events: Vec<BridgeEvent>,
}

impl ClickOutcome {
    fn forward() -> Self {
        Self {
            disposition: ClickDisposition::Forward,
            events: Vec::new(),
        }
    }

    fn absorb(events: Vec<BridgeEvent>) -> Self {
        Self {
            disposition: ClickDisposition::Absorbed,
            events,
        }
    }
}

/// Overrides the click handling of the application window while an overlay is up and turns
/// button presses into lifecycle requests. Never touches timers itself.
#[derive(Debug, Default)]
pub struct ClickRearmBridge {
    app_window: Option<WindowId>,
    bound: Option<WindowId>,
}

impl ClickRearmBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_window(&self) -> Option<WindowId> {
        self.app_window
    }

    pub fn bound_window(&self) -> Option<WindowId> {
        self.bound
    }

    /// Sets the application window to override. If an override is already in place it moves
    /// to the new window.
    pub fn load(&mut self, window: WindowId, clicks: &mut dyn ClickConfigService) {
        self.app_window = Some(window);
        if self.bound.is_some_and(|bound| bound != window) {
            self.unbind(clicks);
            self.bind(clicks);
        }
    }

    pub fn bind(&mut self, clicks: &mut dyn ClickConfigService) {
        if self.bound.is_some() {
            return;
        }
        match self.app_window {
            Some(window) => {
                clicks.bind(window);
                self.bound = Some(window);
                trace!("Bound click override to window {window}");
            }
            None => debug!("No application window loaded, overlay clicks won't be handled"),
        }
    }

    pub fn unbind(&mut self, clicks: &mut dyn ClickConfigService) {
        if let Some(window) = self.bound.take() {
            clicks.unbind(window);
            trace!("Unbound click override from window {window}");
        }
    }

    /// Applies the per variant button policy.
    pub fn route(&self, active: Option<VariantKind>, button: Button) -> ClickOutcome {
        let Some(kind) = active else {
            return ClickOutcome::forward();
        };

        let events = match (kind, button) {
            (_, Button::Back) => vec![BridgeEvent::Dismiss],
            (VariantKind::MiniMessage, Button::Select) => vec![BridgeEvent::Dismiss],
            (VariantKind::Message, Button::Up) => {
                vec![BridgeEvent::Scroll(ScrollDirection::Up), BridgeEvent::Rearm]
            }
            (VariantKind::Message, Button::Down) => {
                vec![BridgeEvent::Scroll(ScrollDirection::Down), BridgeEvent::Rearm]
            }
            _ => vec![BridgeEvent::Rearm],
        };
        ClickOutcome::absorb(events)
    }
}
