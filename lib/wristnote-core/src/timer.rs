use crate::error::{NotifyError, NotifyResult};
use crate::platform::{TimerId, TimerService};
use log::trace;

/// The auto-dismiss timer of one activation. Holds at most one pending timer.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TimerBinding {
    handle: Option<TimerId>,
}

impl TimerBinding {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn handle(&self) -> Option<TimerId> {
        self.handle
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancels the pending timer, if any, and schedules a new one. On failure the binding
    /// is left disarmed.
    pub fn schedule(
        &mut self,
        timers: &mut dyn TimerService,
        timeout_ms: u32,
    ) -> NotifyResult<TimerId> {
        self.cancel(timers);
        let id = timers
            .schedule(timeout_ms)
            .map_err(NotifyError::TimerScheduleFailed)?;
        self.handle = Some(id);
        Ok(id)
    }

    pub fn cancel(&mut self, timers: &mut dyn TimerService) {
        if let Some(id) = self.handle.take() {
            timers.cancel(id);
            trace!("Cancelled auto-dismiss timer {id}");
        }
    }

    /// Consumes an expiry. Returns false if `id` isn't the pending timer.
    pub fn expire(&mut self, id: TimerId) -> bool {
        if self.handle == Some(id) {
            self.handle = None;
            true
        } else {
            false
        }
    }
}
