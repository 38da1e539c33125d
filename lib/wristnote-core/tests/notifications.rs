use uuid::Uuid;
use wristnote_core::overlay::{LifecycleState, OverlayScene, VariantKind};
use wristnote_core::platform::mock::{MockCall, MockWorld};
use wristnote_core::platform::{Button, MessageContent, Rect};
use wristnote_core::{Config, NotificationManager};

const SMALL_FRAME: Rect = Rect::new(0, 0, 100, 50);

fn setup() -> (MockWorld, NotificationManager) {
    let world = MockWorld::new();
    let manager = NotificationManager::init(Config::default(), world.services()).unwrap();
    (world, manager)
}

fn advance(world: &MockWorld, manager: &mut NotificationManager, ms: u64) {
    world.advance(ms, |id| manager.timer_expired(id));
}

fn message(world: &MockWorld, sender: &str, body: &str) -> Uuid {
    let id = Uuid::new_v4();
    world.add_message(id, MessageContent::new(sender, body));
    id
}

fn creates(world: &MockWorld) -> usize {
    world.count(|call| matches!(call, MockCall::OverlayCreated { .. }))
}

fn destroys(world: &MockWorld) -> usize {
    world.count(|call| matches!(call, MockCall::OverlayDestroyed { .. }))
}

fn assert_consistent(manager: &NotificationManager) {
    assert_eq!(
        manager.overlay_id().is_some(),
        manager.state() != LifecycleState::Idle
    );
}

#[test]
fn test_one_overlay_at_a_time() {
    let (world, mut manager) = setup();
    let id = message(&world, "Ana", "Lunch?");

    assert_consistent(&manager);
    manager.show_battery(1000);
    assert_consistent(&manager);
    manager.arrived(id);
    assert_consistent(&manager);
    manager.show_small_message("Saved", SMALL_FRAME);
    assert_consistent(&manager);
    assert_eq!(world.live_overlays(), 1);

    manager.dismiss();
    assert_consistent(&manager);
    assert_eq!(world.live_overlays(), 0);
    assert_eq!(creates(&world), 3);
    assert_eq!(destroys(&world), 3);
}

#[test]
fn test_double_dismiss_is_single_dismiss() {
    let (world, mut manager) = setup();
    manager.show_battery(1000);

    manager.dismiss();
    let journal = world.journal();
    manager.dismiss();

    assert_eq!(world.journal(), journal);
    assert_eq!(manager.state(), LifecycleState::Idle);
}

#[test]
fn test_small_message_dismiss() {
    let (world, mut manager) = setup();

    manager.show_small_message("Hi", SMALL_FRAME);
    assert_eq!(manager.state(), LifecycleState::MiniMessageActive);
    manager.dismiss();

    assert_eq!(manager.state(), LifecycleState::Idle);
    assert!(manager.lifecycle().active_payload().is_none());
    assert_eq!(
        world.count(|call| matches!(
            call,
            MockCall::OverlayDestroyed {
                kind: VariantKind::MiniMessage,
                ..
            }
        )),
        1
    );
}

#[test]
fn test_second_message_refreshes_in_place() {
    let (world, mut manager) = setup();
    let first = message(&world, "Ana", "Lunch?");
    let second = message(&world, "Ben", "Running late");

    manager.arrived(first);
    let overlay = manager.overlay_id();
    world.clear_journal();

    manager.arrived(second);

    assert_eq!(manager.overlay_id(), overlay);
    assert_eq!(creates(&world), 0);
    assert_eq!(destroys(&world), 0);
    let rendered_second = world.count(|call| {
        matches!(
            call,
            MockCall::OverlayRendered {
                scene: OverlayScene::Message { title, .. },
                ..
            } if title == "Ben"
        )
    });
    assert_eq!(rendered_second, 1);
}

#[test]
fn test_switch_destroys_before_create() {
    let (world, mut manager) = setup();
    let id = message(&world, "Ana", "Lunch?");

    manager.show_battery(1000);
    world.clear_journal();
    manager.arrived(id);

    let lifecycle: Vec<MockCall> = world
        .journal()
        .into_iter()
        .filter(|call| {
            matches!(
                call,
                MockCall::OverlayCreated { .. } | MockCall::OverlayDestroyed { .. }
            )
        })
        .collect();
    assert_eq!(
        lifecycle,
        vec![
            MockCall::OverlayDestroyed {
                id: 1,
                kind: VariantKind::Battery
            },
            MockCall::OverlayCreated {
                id: 2,
                kind: VariantKind::Message
            },
        ]
    );
    assert_eq!(manager.state(), LifecycleState::MessageActive);
}

#[test]
fn test_click_rearms_with_fixed_duration() {
    let (world, mut manager) = setup();
    manager.show_battery(1000);

    advance(&world, &mut manager, 500);
    manager.handle_button(Button::Up);

    advance(&world, &mut manager, 1000);
    assert_eq!(manager.state(), LifecycleState::BatteryActive);

    advance(&world, &mut manager, 28_999);
    assert_eq!(world.now_ms(), 30_499);
    assert_eq!(manager.state(), LifecycleState::BatteryActive);

    advance(&world, &mut manager, 1);
    assert_eq!(manager.state(), LifecycleState::Idle);
}

#[test]
fn test_zero_timeout_never_dismisses() {
    let (world, mut manager) = setup();
    manager.show_battery(0);

    manager.handle_button(Button::Down);
    advance(&world, &mut manager, 24 * 60 * 60 * 1000);

    assert_eq!(manager.state(), LifecycleState::BatteryActive);
    assert!(world.pending_timers().is_empty());
}

#[test]
fn test_small_message_default_timeout() {
    let (world, mut manager) = setup();
    manager.show_small_message("x", SMALL_FRAME);

    advance(&world, &mut manager, 4_999);
    assert_eq!(manager.state(), LifecycleState::MiniMessageActive);

    advance(&world, &mut manager, 1);
    assert_eq!(manager.state(), LifecycleState::Idle);
    assert_eq!(world.live_overlays(), 0);
}

#[test]
fn test_overlay_creation_failure_leaves_idle() {
    let (world, mut manager) = setup();
    world.fail_overlay_create(true);

    manager.show_battery(1000);

    assert_eq!(manager.state(), LifecycleState::Idle);
    assert!(world.pending_timers().is_empty());

    world.fail_overlay_create(false);
    manager.show_battery(1000);
    assert_eq!(manager.state(), LifecycleState::BatteryActive);
}

#[test]
fn test_timer_failure_keeps_overlay_up() {
    let (world, mut manager) = setup();
    world.fail_timer_schedule(true);

    manager.show_small_message("Saved", SMALL_FRAME);
    advance(&world, &mut manager, 60_000);

    assert_eq!(manager.state(), LifecycleState::MiniMessageActive);
    assert_eq!(manager.timer_id(), None);

    manager.handle_button(Button::Back);
    assert_eq!(manager.state(), LifecycleState::Idle);
}

#[test]
fn test_stale_expiry_is_ignored() {
    let (world, mut manager) = setup();
    manager.show_battery(1000);
    let stale = manager.timer_id().unwrap();

    manager.handle_button(Button::Select);
    assert_ne!(manager.timer_id(), Some(stale));

    manager.timer_expired(stale);
    assert_eq!(manager.state(), LifecycleState::BatteryActive);
    assert_eq!(destroys(&world), 0);
}

#[test]
fn test_small_message_text_is_truncated() {
    let world = MockWorld::new();
    let config = Config {
        max_message_len: 5,
        ..Default::default()
    };
    let mut manager = NotificationManager::init(config, world.services()).unwrap();

    manager.show_small_message("Downloading", SMALL_FRAME);

    let rendered = world.count(|call| {
        matches!(
            call,
            MockCall::OverlayRendered {
                scene: OverlayScene::MiniMessage { text, .. },
                ..
            } if text == "Downl"
        )
    });
    assert_eq!(rendered, 1);
}

#[test]
fn test_click_override_follows_overlay() {
    let (world, mut manager) = setup();

    manager.show_battery(1000);
    assert_eq!(world.bound_window(), None);
    manager.dismiss();

    manager.load_click_config(7);
    manager.show_battery(1000);
    assert_eq!(world.bound_window(), Some(7));

    manager.show_small_message("Saved", SMALL_FRAME);
    assert_eq!(world.bound_window(), Some(7));

    advance(&world, &mut manager, 5_000);
    assert_eq!(manager.state(), LifecycleState::Idle);
    assert_eq!(world.bound_window(), None);
}

#[test]
fn test_message_buttons_scroll_and_rearm() {
    let (world, mut manager) = setup();
    let body = vec!["line"; 12].join("\n");
    let id = message(&world, "Ana", &body);

    manager.arrived(id);
    advance(&world, &mut manager, 20_000);
    manager.handle_button(Button::Down);

    let scrolled = world.count(|call| {
        matches!(
            call,
            MockCall::OverlayRendered {
                scene: OverlayScene::Message { scroll: 1, .. },
                ..
            }
        )
    });
    assert_eq!(scrolled, 1);

    advance(&world, &mut manager, 29_999);
    assert_eq!(manager.state(), LifecycleState::MessageActive);
    advance(&world, &mut manager, 1);
    assert_eq!(manager.state(), LifecycleState::Idle);
}

#[test]
fn test_click_config_loaded_while_overlay_is_up() {
    let (world, mut manager) = setup();
    manager.show_battery(0);
    assert_eq!(world.bound_window(), None);

    manager.load_click_config(7);
    assert_eq!(world.bound_window(), Some(7));

    manager.dismiss();
    assert_eq!(world.bound_window(), None);
}

#[test]
fn test_switch_out_of_small_message_releases_it() {
    let (world, mut manager) = setup();
    manager.show_small_message("Saved", SMALL_FRAME);

    manager.show_battery(1000);

    let mini_destroyed = world.count(|call| {
        matches!(
            call,
            MockCall::OverlayDestroyed {
                kind: VariantKind::MiniMessage,
                ..
            }
        )
    });
    assert_eq!(mini_destroyed, 1);
    assert_eq!(manager.state(), LifecycleState::BatteryActive);
    assert_eq!(
        manager.lifecycle().active_payload().map(|payload| payload.kind()),
        Some(VariantKind::Battery)
    );
    assert_eq!(world.live_overlays(), 1);
}
