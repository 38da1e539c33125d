use crate::platform::{AlarmId, Button, NotificationId, Rect, TimerId, WindowId};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum NotifyEvent {
    Arrived(NotificationId),
    ShowBattery {
        timeout_ms: u32,
    },
    /// `timeout_ms` of `None` uses the configured mini message timeout
    ShowSmallMessage {
        text: String,
        frame: Rect,
        timeout_ms: Option<u32>,
    },
    ShowIncomingCall {
        caller: String,
    },
    ShowAlarm(AlarmId),
    Dismiss,
    LoadClickConfig(WindowId),
    Button(Button),
    TimerExpired(TimerId),
    Shutdown,
}

pub struct EventBridge {
    sender: mpsc::UnboundedSender<NotifyEvent>,
    receiver: mpsc::UnboundedReceiver<NotifyEvent>,
}

impl EventBridge {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    pub fn dispatcher(&self) -> EventDispatcher {
        EventDispatcher::new(self.sender.clone())
    }

    pub async fn next_event(&mut self) -> Option<NotifyEvent> {
        self.receiver.recv().await
    }

    /// Returns the next queued event without waiting.
    pub fn try_next_event(&mut self) -> Option<NotifyEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct EventDispatcher {
    sender: mpsc::UnboundedSender<NotifyEvent>,
}

impl EventDispatcher {
    pub fn new(sender: mpsc::UnboundedSender<NotifyEvent>) -> Self {
        Self { sender }
    }

    pub fn send(&self, event: NotifyEvent) {
        // If send fails, then the event loop is shutting down.
        let _ = self.sender.send(event);
    }
}
