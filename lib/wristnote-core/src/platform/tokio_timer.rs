use crate::platform::{
    EventDispatcher, NotifyEvent, PlatformErrorType, PlatformResult, TimerId, TimerService,
};
use log::trace;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Timer service backed by the tokio runtime the event loop runs on. Every schedule spawns a
/// sleeping task that posts `TimerExpired` back through the dispatcher.
pub struct TokioTimerService {
    dispatcher: EventDispatcher,
    next_id: TimerId,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioTimerService {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self {
            dispatcher,
            next_id: 1,
            tasks: HashMap::new(),
        }
    }
}

impl TimerService for TokioTimerService {
    fn schedule(&mut self, timeout_ms: u32) -> PlatformResult<TimerId> {
        let runtime = Handle::try_current().map_err(|_| PlatformErrorType::ScheduleFailed)?;

        self.tasks.retain(|_, task| !task.is_finished());

        let id = self.next_id;
        self.next_id += 1;

        let dispatcher = self.dispatcher.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(Duration::from_millis(timeout_ms as u64)).await;
            dispatcher.send(NotifyEvent::TimerExpired(id));
        });
        self.tasks.insert(id, task);

        trace!("Scheduled timer {id} for {timeout_ms}ms");
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
            trace!("Cancelled timer {id}");
        }
    }
}

impl Drop for TokioTimerService {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
