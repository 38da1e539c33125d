use crate::overlay::content::{DisplayEnv, OverlayContent};
use crate::overlay::handle::Overlay;
use crate::overlay::{
    OverlayScene, OverlayWindowBackgroundStyle, OverlayWindowConfig, VariantKind, DISPLAY_BOUNDS,
};

/// Battery status. Holds nothing; the state is read from the monitor every time it is shown.
#[derive(Debug, Default)]
pub struct BatteryNotification;

impl BatteryNotification {
    pub fn new() -> Self {
        Self
    }
}

impl OverlayContent for BatteryNotification {
    fn kind(&self) -> VariantKind {
        VariantKind::Battery
    }

    fn config(&self) -> OverlayWindowConfig {
        OverlayWindowConfig {
            kind: VariantKind::Battery,
            frame: DISPLAY_BOUNDS,
            fullscreen: true,
            corner_radius: 0,
            background: Some(OverlayWindowBackgroundStyle { color: (0, 0, 0) }),
            border: None,
        }
    }

    fn create(&mut self, _overlay: &Overlay) {}

    fn display(&mut self, env: &DisplayEnv<'_>) -> OverlayScene {
        let state = env.battery.state();
        OverlayScene::Battery {
            percent: state.percent.min(100),
            charging: state.charging,
            plugged: state.plugged,
        }
    }

    fn destroy(&mut self) {}
}
