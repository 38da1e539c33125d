use crate::overlay::VariantKind;
use crate::platform::{IconId, Rect};

/// Bounds of the watch display. Fullscreen overlays cover all of it.
pub const DISPLAY_BOUNDS: Rect = Rect::new(0, 0, 144, 168);

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayWindowConfig {
    pub kind: VariantKind,
    pub frame: Rect,
    pub fullscreen: bool,
    pub corner_radius: u8,
    pub background: Option<OverlayWindowBackgroundStyle>,
    pub border: Option<OverlayWindowBorderStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayWindowBackgroundStyle {
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayWindowBorderStyle {
    pub color: (u8, u8, u8),
    pub width: u8,
}

/// What an overlay shows. The compositor lays it out.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayScene {
    Message {
        title: String,
        subtitle: Option<String>,
        body: String,
        icon: IconId,
        scroll: u16,
    },
    Battery {
        percent: u8,
        charging: bool,
        plugged: bool,
    },
    MiniMessage {
        text: String,
        icon: IconId,
    },
}
