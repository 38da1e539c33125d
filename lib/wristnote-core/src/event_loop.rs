use crate::notification_manager::NotificationManager;
use crate::platform::{EventBridge, NotifyEvent};
use log::{info, trace};

pub struct EventLoop {}

impl EventLoop {
    /// Feeds events to the manager one at a time until `Shutdown` arrives or every dispatcher
    /// is gone. Each event's transition completes before the next event is read.
    pub async fn run(mut bridge: EventBridge, mut manager: NotificationManager) {
        trace!("Handling events...");

        while let Some(event) = bridge.next_event().await {
            if matches!(event, NotifyEvent::Shutdown) {
                break;
            }
            trace!("Event: {event:?}");
            manager.handle_event(event);
        }

        manager.shutdown();
        info!("Notification event loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::overlay::VariantKind;
    use crate::platform::mock::{MockCall, MockWorld};
    use crate::platform::tokio_timer::TokioTimerService;
    use crate::platform::Button;
    use std::time::Duration;

    fn manager(world: &MockWorld, bridge: &EventBridge) -> NotificationManager {
        let mut services = world.services();
        services.timers = Box::new(TokioTimerService::new(bridge.dispatcher()));
        NotificationManager::init(Config::default(), services).unwrap()
    }

    fn lifecycle_calls(world: &MockWorld) -> Vec<MockCall> {
        world
            .journal()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    MockCall::OverlayCreated { .. } | MockCall::OverlayDestroyed { .. }
                )
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_expiry_dismisses_through_loop() {
        let world = MockWorld::new();
        let bridge = EventBridge::new();
        let dispatcher = bridge.dispatcher();
        let manager = manager(&world, &bridge);

        dispatcher.send(NotifyEvent::ShowBattery { timeout_ms: 1000 });
        let driver = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            assert_eq!(world.live_overlays(), 1);
            tokio::time::sleep(Duration::from_millis(1000)).await;
            assert_eq!(world.live_overlays(), 0);
            dispatcher.send(NotifyEvent::Shutdown);
        };
        tokio::join!(EventLoop::run(bridge, manager), driver);

        assert_eq!(
            lifecycle_calls(&world),
            vec![
                MockCall::OverlayCreated {
                    id: 1,
                    kind: VariantKind::Battery
                },
                MockCall::OverlayDestroyed {
                    id: 1,
                    kind: VariantKind::Battery
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_rearms_through_loop() {
        let world = MockWorld::new();
        let bridge = EventBridge::new();
        let dispatcher = bridge.dispatcher();
        let manager = manager(&world, &bridge);

        dispatcher.send(NotifyEvent::ShowBattery { timeout_ms: 1000 });
        let driver = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            dispatcher.send(NotifyEvent::Button(Button::Up));
            tokio::time::sleep(Duration::from_millis(29_000)).await;
            assert_eq!(world.live_overlays(), 1);
            tokio::time::sleep(Duration::from_millis(1_500)).await;
            assert_eq!(world.live_overlays(), 0);
            dispatcher.send(NotifyEvent::Shutdown);
        };
        tokio::join!(EventLoop::run(bridge, manager), driver);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_tears_down_overlay() {
        let world = MockWorld::new();
        let bridge = EventBridge::new();
        let dispatcher = bridge.dispatcher();
        let manager = manager(&world, &bridge);

        dispatcher.send(NotifyEvent::ShowBattery { timeout_ms: 0 });
        dispatcher.send(NotifyEvent::Shutdown);
        EventLoop::run(bridge, manager).await;

        assert_eq!(world.live_overlays(), 0);
        assert_eq!(lifecycle_calls(&world).len(), 2);
    }
}
