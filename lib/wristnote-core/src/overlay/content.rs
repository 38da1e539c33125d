use crate::overlay::handle::Overlay;
use crate::overlay::{OverlayScene, OverlayWindowConfig, VariantKind};
use crate::platform::BatteryMonitor;

/// Live device state a variant may read while building its scene.
pub struct DisplayEnv<'a> {
    pub battery: &'a dyn BatteryMonitor,
}

/// The create/display/destroy capabilities every notification variant provides to the
/// lifecycle.
pub trait OverlayContent {
    fn kind(&self) -> VariantKind;

    fn config(&self) -> OverlayWindowConfig;

    /// Called once the overlay window exists, before the first `display`.
    fn create(&mut self, overlay: &Overlay);

    fn display(&mut self, env: &DisplayEnv<'_>) -> OverlayScene;

    /// Releases everything the variant owns. Must be safe to call more than once; only the
    /// first call releases.
    fn destroy(&mut self);
}
