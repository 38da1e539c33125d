mod config;
mod content;
mod handle;
mod lifecycle;
mod payload;

pub mod overlays;

pub use config::{
    OverlayScene, OverlayWindowBackgroundStyle, OverlayWindowBorderStyle, OverlayWindowConfig,
    DISPLAY_BOUNDS,
};
pub use content::{DisplayEnv, OverlayContent};
pub use handle::Overlay;
pub use lifecycle::{DismissReason, OverlayLifecycle};
pub use payload::{Refresh, ShowRequest, Timeout, VariantPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Message,
    Battery,
    MiniMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    MessageActive,
    BatteryActive,
    MiniMessageActive,
}

impl From<Option<VariantKind>> for LifecycleState {
    fn from(kind: Option<VariantKind>) -> Self {
        match kind {
            None => LifecycleState::Idle,
            Some(VariantKind::Message) => LifecycleState::MessageActive,
            Some(VariantKind::Battery) => LifecycleState::BatteryActive,
            Some(VariantKind::MiniMessage) => LifecycleState::MiniMessageActive,
        }
    }
}
