use crate::overlay::content::{DisplayEnv, OverlayContent};
use crate::overlay::handle::Overlay;
use crate::overlay::overlays::{
    NotificationLayer, ScrollDirection, ICON_ALARM, ICON_INCOMING_CALL,
};
use crate::overlay::{
    OverlayScene, OverlayWindowBackgroundStyle, OverlayWindowConfig, VariantKind, DISPLAY_BOUNDS,
};
use crate::platform::{AlarmId, MessageContent, NotificationId};

/// Where the content of a full screen message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Stored(NotificationId),
    IncomingCall { caller: String },
    Alarm { alarm_id: AlarmId },
}

/// Full screen message. Incoming calls and alarms are shown through this variant too.
#[derive(Debug)]
pub struct MessageNotification {
    source: MessageSource,
    pending: Option<MessageContent>,
    layer: Option<NotificationLayer>,
}

impl MessageNotification {
    pub fn stored(id: NotificationId, content: MessageContent) -> Self {
        Self::new(MessageSource::Stored(id), content)
    }

    pub fn incoming_call(caller: &str) -> Self {
        let content = MessageContent {
            sender: caller.to_string(),
            subject: Some("Incoming call".to_string()),
            icon: ICON_INCOMING_CALL,
            ..Default::default()
        };
        Self::new(
            MessageSource::IncomingCall {
                caller: caller.to_string(),
            },
            content,
        )
    }

    pub fn alarm(alarm_id: AlarmId) -> Self {
        let content = MessageContent {
            sender: "Alarm".to_string(),
            body: format!("Alarm {alarm_id}"),
            icon: ICON_ALARM,
            ..Default::default()
        };
        Self::new(MessageSource::Alarm { alarm_id }, content)
    }

    fn new(source: MessageSource, content: MessageContent) -> Self {
        Self {
            source,
            pending: Some(content),
            layer: None,
        }
    }

    pub fn source(&self) -> &MessageSource {
        &self.source
    }

    pub fn layer(&self) -> Option<&NotificationLayer> {
        self.layer.as_ref()
    }

    pub fn content(&self) -> Option<&MessageContent> {
        self.layer
            .as_ref()
            .map(NotificationLayer::content)
            .or(self.pending.as_ref())
    }

    /// Takes over the source and content of `other` without touching the layer binding.
    pub fn refresh(&mut self, mut other: MessageNotification) {
        let Some(content) = other.pending.take() else {
            return;
        };
        self.source = other.source;
        match self.layer.as_mut() {
            Some(layer) => layer.set_content(content),
            None => self.pending = Some(content),
        }
    }

    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        self.layer
            .as_mut()
            .is_some_and(|layer| layer.scroll(direction))
    }
}

impl OverlayContent for MessageNotification {
    fn kind(&self) -> VariantKind {
        VariantKind::Message
    }

    fn config(&self) -> OverlayWindowConfig {
        OverlayWindowConfig {
            kind: VariantKind::Message,
            frame: DISPLAY_BOUNDS,
            fullscreen: true,
            corner_radius: 0,
            background: Some(OverlayWindowBackgroundStyle {
                color: (255, 255, 255),
            }),
            border: None,
        }
    }

    fn create(&mut self, overlay: &Overlay) {
        if let Some(content) = self.pending.take() {
            self.layer = Some(NotificationLayer::new(overlay.id(), content));
        }
    }

    fn display(&mut self, _env: &DisplayEnv<'_>) -> OverlayScene {
        match (&self.layer, &self.pending) {
            (Some(layer), _) => layer.scene(),
            (None, Some(content)) => NotificationLayer::new(0, content.clone()).scene(),
            (None, None) => NotificationLayer::new(0, MessageContent::default()).scene(),
        }
    }

    fn destroy(&mut self) {
        self.layer = None;
        self.pending = None;
    }
}
