//! Deadline-based one-shot timers polled from the frame loop.
//!
//! A [`TimerSlot`] holds at most one pending task. Scheduling always cancels
//! the previous task first, so a superseded callback can never fire.

use std::time::{Duration, Instant};

/// Token returned by [`TimerSlot::schedule`]; only cancels the task it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct PendingTask<T> {
    handle: TimerHandle,
    due: Instant,
    payload: T,
}

#[derive(Debug)]
pub struct TimerSlot<T> {
    pending: Option<PendingTask<T>>,
    next_handle: u64,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerSlot<T> {
    pub const fn new() -> Self {
        Self {
            pending: None,
            next_handle: 0,
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerHandle {
        self.cancel_pending();
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending = Some(PendingTask {
            handle,
            due: now + delay,
            payload,
        });
        handle
    }

    /// Cancels the task only if `handle` still identifies it. Returns whether anything was dropped.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if self.pending.as_ref().is_some_and(|task| task.handle == handle) {
            self.pending = None;
            return true;
        }
        false
    }

    pub fn cancel_pending(&mut self) -> Option<T> {
        self.pending.take().map(|task| task.payload)
    }

    /// Takes the payload once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|task| now >= task.due) {
            return self.pending.take().map(|task| task.payload);
        }
        None
    }

    pub fn pending_payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|task| &task.payload)
    }
}
