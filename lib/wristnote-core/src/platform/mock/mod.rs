use crate::overlay::{OverlayScene, OverlayWindowConfig, VariantKind};
use crate::platform::{
    BatteryMonitor, BatteryState, ClickConfigService, MessageContent, MessageStore,
    NotificationId, OverlayId, OverlayService, PlatformErrorType, PlatformResult, Rect, Services,
    TimerId, TimerService, WindowId,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Everything the mock collaborators did, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    OverlayCreated { id: OverlayId, kind: VariantKind },
    OverlayRendered { id: OverlayId, scene: OverlayScene },
    OverlayMoved { id: OverlayId, frame: Rect },
    OverlayDestroyed { id: OverlayId, kind: VariantKind },
    TimerScheduled {
        id: TimerId,
        timeout_ms: u32,
        deadline_ms: u64,
    },
    TimerCancelled { id: TimerId },
    ClickBound(WindowId),
    ClickUnbound(WindowId),
}

#[derive(Debug)]
struct WorldState {
    journal: Vec<MockCall>,
    now_ms: u64,
    next_overlay_id: OverlayId,
    next_timer_id: TimerId,
    overlays: HashMap<OverlayId, VariantKind>,
    timers: BTreeMap<TimerId, u64>,
    messages: HashMap<NotificationId, MessageContent>,
    battery: BatteryState,
    bound: Option<WindowId>,
    fail_overlay_create: bool,
    fail_timer_schedule: bool,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            journal: Vec::new(),
            now_ms: 0,
            next_overlay_id: 1,
            next_timer_id: 1,
            overlays: HashMap::new(),
            timers: BTreeMap::new(),
            messages: HashMap::new(),
            battery: BatteryState {
                percent: 100,
                charging: false,
                plugged: false,
            },
            bound: None,
            fail_overlay_create: false,
            fail_timer_schedule: false,
        }
    }
}

/// A simulated device: compositor, timer wheel with a manual clock, message store, click
/// config and battery. The services it hands out share its state, so a test can keep the
/// world and watch what the controller does with them.
#[derive(Debug, Clone, Default)]
pub struct MockWorld {
    state: Rc<RefCell<WorldState>>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> Services {
        Services {
            overlays: Box::new(MockOverlayService(self.clone())),
            timers: Box::new(MockTimerService(self.clone())),
            messages: Box::new(MockMessageStore(self.clone())),
            clicks: Box::new(MockClickConfig(self.clone())),
            battery: Box::new(MockBatteryMonitor(self.clone())),
        }
    }

    pub fn journal(&self) -> Vec<MockCall> {
        self.state.borrow().journal.clone()
    }

    pub fn clear_journal(&self) {
        self.state.borrow_mut().journal.clear();
    }

    pub fn count(&self, predicate: impl Fn(&MockCall) -> bool) -> usize {
        self.state
            .borrow()
            .journal
            .iter()
            .filter(|call| predicate(call))
            .count()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn live_overlays(&self) -> usize {
        self.state.borrow().overlays.len()
    }

    pub fn pending_timers(&self) -> Vec<TimerId> {
        self.state.borrow().timers.keys().copied().collect()
    }

    pub fn bound_window(&self) -> Option<WindowId> {
        self.state.borrow().bound
    }

    pub fn add_message(&self, id: NotificationId, content: MessageContent) {
        self.state.borrow_mut().messages.insert(id, content);
    }

    pub fn set_battery(&self, battery: BatteryState) {
        self.state.borrow_mut().battery = battery;
    }

    pub fn fail_overlay_create(&self, fail: bool) {
        self.state.borrow_mut().fail_overlay_create = fail;
    }

    pub fn fail_timer_schedule(&self, fail: bool) {
        self.state.borrow_mut().fail_timer_schedule = fail;
    }

    /// Moves the clock forward by `ms`, calling `fire` for every timer that comes due, in
    /// deadline order. The clock stands at each deadline while its timer fires.
    pub fn advance(&self, ms: u64, mut fire: impl FnMut(TimerId)) {
        let target = self.now_ms() + ms;
        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .filter(|(_, deadline)| **deadline <= target)
                    .min_by_key(|(id, deadline)| (**deadline, **id))
                    .map(|(id, deadline)| (*id, *deadline));
                match next {
                    Some((id, deadline)) => {
                        state.timers.remove(&id);
                        state.now_ms = deadline;
                        Some(id)
                    }
                    None => {
                        state.now_ms = target;
                        None
                    }
                }
            };
            match due {
                Some(id) => fire(id),
                None => break,
            }
        }
    }

    fn record(&self, call: MockCall) {
        self.state.borrow_mut().journal.push(call);
    }
}

pub struct MockOverlayService(MockWorld);
impl OverlayService for MockOverlayService {
    fn create(&mut self, config: &OverlayWindowConfig) -> PlatformResult<OverlayId> {
        let id = {
            let mut state = self.0.state.borrow_mut();
            if state.fail_overlay_create {
                return Err(PlatformErrorType::ResourceExhausted.into());
            }
            let id = state.next_overlay_id;
            state.next_overlay_id += 1;
            state.overlays.insert(id, config.kind);
            id
        };
        self.0.record(MockCall::OverlayCreated {
            id,
            kind: config.kind,
        });
        Ok(id)
    }

    fn render(&mut self, id: OverlayId, scene: &OverlayScene) -> PlatformResult<()> {
        if !self.0.state.borrow().overlays.contains_key(&id) {
            return Err(format!("Overlay {id} does not exist").into());
        }
        self.0.record(MockCall::OverlayRendered {
            id,
            scene: scene.clone(),
        });
        Ok(())
    }

    fn move_to(&mut self, id: OverlayId, frame: &Rect) -> PlatformResult<()> {
        if !self.0.state.borrow().overlays.contains_key(&id) {
            return Err(format!("Overlay {id} does not exist").into());
        }
        self.0.record(MockCall::OverlayMoved { id, frame: *frame });
        Ok(())
    }

    fn destroy(&mut self, id: OverlayId) {
        let kind = self.0.state.borrow_mut().overlays.remove(&id);
        if let Some(kind) = kind {
            self.0.record(MockCall::OverlayDestroyed { id, kind });
        }
    }
}

pub struct MockTimerService(MockWorld);
impl TimerService for MockTimerService {
    fn schedule(&mut self, timeout_ms: u32) -> PlatformResult<TimerId> {
        let (id, deadline_ms) = {
            let mut state = self.0.state.borrow_mut();
            if state.fail_timer_schedule {
                return Err(PlatformErrorType::ScheduleFailed.into());
            }
            let id = state.next_timer_id;
            state.next_timer_id += 1;
            let deadline_ms = state.now_ms + timeout_ms as u64;
            state.timers.insert(id, deadline_ms);
            (id, deadline_ms)
        };
        self.0.record(MockCall::TimerScheduled {
            id,
            timeout_ms,
            deadline_ms,
        });
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        self.0.state.borrow_mut().timers.remove(&id);
        self.0.record(MockCall::TimerCancelled { id });
    }
}

pub struct MockMessageStore(MockWorld);
impl MessageStore for MockMessageStore {
    fn lookup(&self, id: &NotificationId) -> PlatformResult<MessageContent> {
        self.0
            .state
            .borrow()
            .messages
            .get(id)
            .cloned()
            .ok_or_else(|| PlatformErrorType::NotFound.into())
    }
}

pub struct MockClickConfig(MockWorld);
impl ClickConfigService for MockClickConfig {
    fn bind(&mut self, window: WindowId) {
        self.0.state.borrow_mut().bound = Some(window);
        self.0.record(MockCall::ClickBound(window));
    }

    fn unbind(&mut self, window: WindowId) {
        {
            let mut state = self.0.state.borrow_mut();
            if state.bound == Some(window) {
                state.bound = None;
            }
        }
        self.0.record(MockCall::ClickUnbound(window));
    }
}

pub struct MockBatteryMonitor(MockWorld);
impl BatteryMonitor for MockBatteryMonitor {
    fn state(&self) -> BatteryState {
        self.0.state.borrow().battery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_fires_in_deadline_order() {
        let world = MockWorld::new();
        let mut services = world.services();
        let late = services.timers.schedule(300).unwrap();
        let early = services.timers.schedule(100).unwrap();
        let never = services.timers.schedule(1000).unwrap();

        let mut fired = Vec::new();
        world.advance(500, |id| fired.push((id, world.now_ms())));

        assert_eq!(fired, vec![(early, 100), (late, 300)]);
        assert_eq!(world.now_ms(), 500);
        assert_eq!(world.pending_timers(), vec![never]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let world = MockWorld::new();
        let mut services = world.services();
        let id = services.timers.schedule(100).unwrap();
        services.timers.cancel(id);

        let mut fired = 0;
        world.advance(1000, |_| fired += 1);
        assert_eq!(fired, 0);
    }
}
