use crate::overlay::{OverlayScene, OverlayWindowConfig, VariantKind};
use crate::platform::{OverlayId, OverlayService, PlatformResult, Rect};
use log::debug;

/// Exclusive handle to a live overlay window. Consumed by `destroy`, so a torn down overlay
/// can't be used again.
#[derive(Debug, PartialEq, Eq)]
pub struct Overlay {
    id: OverlayId,
    kind: VariantKind,
}

impl Overlay {
    pub(crate) fn create(
        service: &mut dyn OverlayService,
        config: &OverlayWindowConfig,
    ) -> PlatformResult<Self> {
        let id = service.create(config)?;
        debug!("Created {:?} overlay {}", config.kind, id);
        Ok(Self {
            id,
            kind: config.kind,
        })
    }

    pub fn render(
        &self,
        service: &mut dyn OverlayService,
        scene: &OverlayScene,
    ) -> PlatformResult<()> {
        service.render(self.id, scene)
    }

    pub fn move_to(&self, service: &mut dyn OverlayService, frame: &Rect) -> PlatformResult<()> {
        service.move_to(self.id, frame)
    }

    pub(crate) fn destroy(self, service: &mut dyn OverlayService) {
        service.destroy(self.id);
        debug!("Destroyed {:?} overlay {}", self.kind, self.id);
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }
}
