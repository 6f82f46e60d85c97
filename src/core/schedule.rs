//! Delayed visual tasks and a virtual-clock timeline to run them on the host.

use std::collections::BTreeMap;

use crate::messages::MessageId;
use crate::reaction::Target;
use crate::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    ClearShake(Target),
    FadeMessage(MessageId),
    DropMessage(MessageId),
    RevealCard(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub delay: Duration,
    pub task: TimerTask,
}

impl Timer {
    pub fn new(delay: Duration, task: TimerTask) -> Self {
        Self { delay, task }
    }
}

/// Pending tasks keyed by due time, ties broken by scheduling order.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), TimerTask>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Schedule relative to the current virtual time.
    pub fn schedule(&mut self, timer: Timer) {
        let key = (self.now + timer.delay, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(key, timer.task);
    }

    /// Pop the earliest task due at or before `until`, moving the clock to it.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerTask> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        self.now = self.now.max(due);
        self.queue.remove(&(due, seq))
    }

    /// Move the clock forward without running anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}
