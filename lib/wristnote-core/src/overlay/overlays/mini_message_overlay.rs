use crate::overlay::content::{DisplayEnv, OverlayContent};
use crate::overlay::handle::Overlay;
use crate::overlay::{
    OverlayScene, OverlayWindowBackgroundStyle, OverlayWindowBorderStyle, OverlayWindowConfig,
    VariantKind,
};
use crate::platform::{IconId, Rect};
use log::trace;

/// Small boxed message that doesn't cover the whole display. The text is copied on
/// construction since the caller's string may not outlive the overlay.
#[derive(Debug)]
pub struct MiniMessageNotification {
    text: Option<String>,
    icon: IconId,
    frame: Rect,
}

impl MiniMessageNotification {
    /// Copies at most `max_len` characters of `text`.
    pub fn new(text: &str, icon: IconId, frame: Rect, max_len: usize) -> Self {
        Self {
            text: Some(text.chars().take(max_len).collect()),
            icon,
            frame,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn icon(&self) -> IconId {
        self.icon
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Takes over the text, icon and frame of `other`. Returns the new frame when it moved.
    pub fn refresh(&mut self, mut other: MiniMessageNotification) -> Option<Rect> {
        self.release_text();
        self.text = other.text.take();
        self.icon = other.icon;

        if self.frame == other.frame {
            None
        } else {
            self.frame = other.frame;
            Some(self.frame)
        }
    }

    /// Returns true if there was text to release.
    fn release_text(&mut self) -> bool {
        match self.text.take() {
            Some(text) => {
                trace!("Released mini message text ({} bytes)", text.len());
                true
            }
            None => false,
        }
    }
}

impl OverlayContent for MiniMessageNotification {
    fn kind(&self) -> VariantKind {
        VariantKind::MiniMessage
    }

    fn config(&self) -> OverlayWindowConfig {
        OverlayWindowConfig {
            kind: VariantKind::MiniMessage,
            frame: self.frame,
            fullscreen: false,
            corner_radius: 6,
            background: Some(OverlayWindowBackgroundStyle {
                color: (255, 255, 255),
            }),
            border: Some(OverlayWindowBorderStyle {
                color: (0, 0, 0),
                width: 2,
            }),
        }
    }

    fn create(&mut self, _overlay: &Overlay) {}

    fn display(&mut self, _env: &DisplayEnv<'_>) -> OverlayScene {
        OverlayScene::MiniMessage {
            text: self.text.clone().unwrap_or_default(),
            icon: self.icon,
        }
    }

    fn destroy(&mut self) {
        self.release_text();
    }
}
