//! One-shot deferred tasks on the host timeline.
//!
//! Replaces self-rescheduling callbacks: a repeating task re-arms itself
//! explicitly, and every arm returns a [`TimerId`] that can cancel it.

use std::collections::BTreeMap;

/// Cancellation token. Orders by due time, then by arm order, so tasks due
/// at the same instant run first-armed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    due_us: i64,
    seq: u64,
}

impl TimerId {
    pub fn due_ms(&self) -> f64 {
        self.due_us as f64 / 1000.0
    }
}

pub struct TimerQueue<T> {
    tasks: BTreeMap<TimerId, T>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due_ms: f64, task: T) -> TimerId {
        let id = TimerId {
            due_us: (due_ms * 1000.0).round() as i64,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.tasks.insert(id, task);
        id
    }

    /// Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.tasks.remove(&id)
    }

    pub fn contains(&self, id: TimerId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Remove and return the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerId, T)> {
        let now_us = (now_ms * 1000.0).round() as i64;
        let first = *self.tasks.keys().next()?;
        if first.due_us > now_us {
            return None;
        }
        self.tasks.remove(&first).map(|task| (first, task))
    }

    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.tasks.keys().next().map(TimerId::due_ms)
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
