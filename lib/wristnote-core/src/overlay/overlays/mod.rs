mod battery_overlay;
mod message_overlay;
mod mini_message_overlay;
mod notification_layer;

pub use battery_overlay::BatteryNotification;
pub use message_overlay::{MessageNotification, MessageSource};
pub use mini_message_overlay::MiniMessageNotification;
pub use notification_layer::{NotificationLayer, ScrollDirection};

use crate::platform::IconId;

pub const ICON_INCOMING_CALL: IconId = 2;
pub const ICON_ALARM: IconId = 3;
