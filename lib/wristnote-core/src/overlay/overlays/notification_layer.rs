use crate::overlay::OverlayScene;
use crate::platform::{MessageContent, OverlayId};

const CHARS_PER_LINE: usize = 18;
const VISIBLE_BODY_LINES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Rendered content of a full screen message, bound to the overlay it was created on.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationLayer {
    overlay: OverlayId,
    content: MessageContent,
    scroll: u16,
}

impl NotificationLayer {
    pub fn new(overlay: OverlayId, content: MessageContent) -> Self {
        Self {
            overlay,
            content,
            scroll: 0,
        }
    }

    pub fn overlay(&self) -> OverlayId {
        self.overlay
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Swaps in new content and scrolls back to the top.
    pub fn set_content(&mut self, content: MessageContent) {
        self.content = content;
        self.scroll = 0;
    }

    /// Returns true if the offset changed.
    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        let previous = self.scroll;
        self.scroll = match direction {
            ScrollDirection::Up => self.scroll.saturating_sub(1),
            ScrollDirection::Down => self.scroll.saturating_add(1).min(self.max_scroll()),
        };
        self.scroll != previous
    }

    fn max_scroll(&self) -> u16 {
        let lines: usize = self
            .content
            .body
            .lines()
            .map(|line| line.chars().count().div_ceil(CHARS_PER_LINE).max(1))
            .sum();
        lines.saturating_sub(VISIBLE_BODY_LINES).min(u16::MAX as usize) as u16
    }

    pub fn scene(&self) -> OverlayScene {
        OverlayScene::Message {
            title: self.content.sender.clone(),
            subtitle: self
                .content
                .subject
                .clone()
                .or_else(|| self.content.app_name.clone()),
            body: self.content.body.clone(),
            icon: self.content.icon,
            scroll: self.scroll,
        }
    }
}
