use crate::overlay::content::OverlayContent;
use crate::overlay::overlays::{
    BatteryNotification, MessageNotification, MiniMessageNotification, ScrollDirection,
};
use crate::overlay::VariantKind;
use crate::platform::Rect;

/// The closed set of notification variants the lifecycle can hold.
#[derive(Debug)]
pub enum VariantPayload {
    Message(MessageNotification),
    Battery(BatteryNotification),
    MiniMessage(MiniMessageNotification),
}

impl VariantPayload {
    pub fn kind(&self) -> VariantKind {
        self.content().kind()
    }

    pub fn content(&self) -> &dyn OverlayContent {
        match self {
            VariantPayload::Message(message) => message,
            VariantPayload::Battery(battery) => battery,
            VariantPayload::MiniMessage(mini) => mini,
        }
    }

    pub fn content_mut(&mut self) -> &mut dyn OverlayContent {
        match self {
            VariantPayload::Message(message) => message,
            VariantPayload::Battery(battery) => battery,
            VariantPayload::MiniMessage(mini) => mini,
        }
    }

    /// Updates this payload in place from one of the same variant. Gives `incoming` back
    /// untouched when the variants differ.
    pub fn refresh(&mut self, incoming: VariantPayload) -> Result<Refresh, VariantPayload> {
        match (self, incoming) {
            (VariantPayload::Message(current), VariantPayload::Message(next)) => {
                current.refresh(next);
                Ok(Refresh::default())
            }
            (VariantPayload::Battery(_), VariantPayload::Battery(_)) => Ok(Refresh::default()),
            (VariantPayload::MiniMessage(current), VariantPayload::MiniMessage(next)) => {
                Ok(Refresh {
                    moved_to: current.refresh(next),
                })
            }
            (_, incoming) => Err(incoming),
        }
    }

    /// Only messages scroll. Returns true if the content moved.
    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        match self {
            VariantPayload::Message(message) => message.scroll(direction),
            _ => false,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Refresh {
    pub moved_to: Option<Rect>,
}

/// How the caller asked for the auto-dismiss timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Configured default. Used on creation, ignored on refresh.
    Default(u32),
    /// Given by the caller. A non-zero value replaces the running timer on refresh.
    Explicit(u32),
}

impl Timeout {
    pub fn ms(self) -> u32 {
        match self {
            Timeout::Default(ms) | Timeout::Explicit(ms) => ms,
        }
    }

    /// The timeout a refresh should reschedule with, if any.
    pub fn on_refresh(self) -> Option<u32> {
        match self {
            Timeout::Explicit(ms) if ms != 0 => Some(ms),
            _ => None,
        }
    }
}

/// A validated request to show a variant.
#[derive(Debug)]
pub struct ShowRequest {
    pub payload: VariantPayload,
    pub timeout: Timeout,
}

impl ShowRequest {
    pub fn new(payload: VariantPayload, timeout: Timeout) -> Self {
        Self { payload, timeout }
    }
}
