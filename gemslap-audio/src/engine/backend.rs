//! Audio backend trait: what the engine needs from an audio context.
//!
//! `AudioBackend` covers the clock, the context state and event playback,
//! independently of whether samples go to a sound card, a WAV file or
//! nowhere. This lets the scheduler and lifecycle logic be unit tested
//! without an audio device.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use gemslap_types::{ContextState, UnitKind};

use crate::graph::{EventId, SoundEvent};

/// Result type for backend operations.
pub type BackendResult<T = ()> = Result<T, BackendError>;

/// Error from a backend operation.
#[derive(Debug, Clone)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BackendError {}

impl From<std::io::Error> for BackendError {
    fn from(e: std::io::Error) -> Self {
        BackendError(e.to_string())
    }
}

impl From<String> for BackendError {
    fn from(s: String) -> Self {
        BackendError(s)
    }
}

/// Semantic-level audio context.
pub trait AudioBackend: Send {
    fn state(&self) -> ContextState;

    /// Audio clock in seconds. Stands still while the context is not running.
    fn current_time(&self) -> f64;

    fn sample_rate(&self) -> u32;

    /// Ask the context to run. May fail, e.g. when the device is gone.
    fn resume(&self) -> BackendResult;

    fn suspend(&self) -> BackendResult;

    /// Play `event` at `event.start` on the audio clock.
    fn schedule(&self, id: EventId, event: &SoundEvent) -> BackendResult;

    /// Forget a scheduled event. Unknown ids are not an error.
    fn release(&self, id: EventId) -> BackendResult;
}

// ─── Test Backend ───────────────────────────────────────────────────

/// An operation recorded by `TestBackend` for assertion in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOp {
    Resume,
    Suspend,
    Scheduled { id: EventId, event: SoundEvent },
    Released(EventId),
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A backend with a hand-driven clock that records every operation.
/// Uses `Mutex` for interior mutability so it is `Send + Sync` and can be
/// shared through `Arc<TestBackend>`.
pub struct TestBackend {
    ops: Mutex<Vec<TestOp>>,
    time: Mutex<f64>,
    state: Mutex<ContextState>,
    resume_fails: AtomicBool,
    sample_rate: u32,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            ops: Mutex::new(Vec::new()),
            time: Mutex::new(0.0),
            state: Mutex::new(ContextState::Suspended),
            resume_fails: AtomicBool::new(false),
            sample_rate: 44_100,
        }
    }

    /// Start in `Running`, as if the context was already unlocked.
    pub fn running() -> Self {
        let backend = Self::new();
        backend.set_state(ContextState::Running);
        backend
    }

    pub fn set_time(&self, secs: f64) {
        *lock(&self.time) = secs;
    }

    /// Advance the clock, but only while running.
    pub fn advance(&self, secs: f64) {
        if lock(&self.state).is_running() {
            *lock(&self.time) += secs;
        }
    }

    pub fn set_state(&self, state: ContextState) {
        *lock(&self.state) = state;
    }

    /// Make subsequent `resume` calls fail.
    pub fn fail_resume(&self, fail: bool) {
        self.resume_fails.store(fail, Ordering::Relaxed);
    }

    /// Return all recorded operations.
    pub fn operations(&self) -> Vec<TestOp> {
        lock(&self.ops).clone()
    }

    /// Clear recorded operations.
    pub fn clear(&self) {
        lock(&self.ops).clear();
    }

    /// Count operations matching a predicate.
    pub fn count<F: Fn(&TestOp) -> bool>(&self, f: F) -> usize {
        lock(&self.ops).iter().filter(|op| f(op)).count()
    }

    /// All scheduled events, in scheduling order.
    pub fn scheduled(&self) -> Vec<SoundEvent> {
        lock(&self.ops)
            .iter()
            .filter_map(|op| match op {
                TestOp::Scheduled { event, .. } => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    /// Kinds of all scheduled events, in scheduling order.
    pub fn scheduled_kinds(&self) -> Vec<UnitKind> {
        self.scheduled().iter().map(|e| e.kind).collect()
    }

    /// Ids of all released events.
    pub fn released(&self) -> Vec<EventId> {
        lock(&self.ops)
            .iter()
            .filter_map(|op| match op {
                TestOp::Released(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for TestBackend {
    fn state(&self) -> ContextState {
        *lock(&self.state)
    }

    fn current_time(&self) -> f64 {
        *lock(&self.time)
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn resume(&self) -> BackendResult {
        lock(&self.ops).push(TestOp::Resume);
        let mut state = lock(&self.state);
        if *state == ContextState::Closed {
            return Err(BackendError("context is closed".to_string()));
        }
        if self.resume_fails.load(Ordering::Relaxed) {
            return Err(BackendError("resume refused".to_string()));
        }
        *state = ContextState::Running;
        Ok(())
    }

    fn suspend(&self) -> BackendResult {
        lock(&self.ops).push(TestOp::Suspend);
        let mut state = lock(&self.state);
        if *state != ContextState::Closed {
            *state = ContextState::Suspended;
        }
        Ok(())
    }

    fn schedule(&self, id: EventId, event: &SoundEvent) -> BackendResult {
        lock(&self.ops).push(TestOp::Scheduled {
            id,
            event: event.clone(),
        });
        Ok(())
    }

    fn release(&self, id: EventId) -> BackendResult {
        lock(&self.ops).push(TestOp::Released(id));
        Ok(())
    }
}

/// Wraps `Arc<TestBackend>` to implement `AudioBackend` so the engine can
/// own a `Box<dyn AudioBackend>` while tests retain an `Arc` for assertions.
pub struct SharedTestBackend(pub Arc<TestBackend>);

impl AudioBackend for SharedTestBackend {
    fn state(&self) -> ContextState {
        self.0.state()
    }
    fn current_time(&self) -> f64 {
        self.0.current_time()
    }
    fn sample_rate(&self) -> u32 {
        self.0.sample_rate()
    }
    fn resume(&self) -> BackendResult {
        self.0.resume()
    }
    fn suspend(&self) -> BackendResult {
        self.0.suspend()
    }
    fn schedule(&self, id: EventId, event: &SoundEvent) -> BackendResult {
        self.0.schedule(id, event)
    }
    fn release(&self, id: EventId) -> BackendResult {
        self.0.release(id)
    }
}

// ─── NullBackend ────────────────────────────────────────────────────

/// Stand-in when no output device exists. Reports a closed context so the
/// engine never schedules anything; every call succeeds.
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn state(&self) -> ContextState { ContextState::Closed }
    fn current_time(&self) -> f64 { 0.0 }
    fn sample_rate(&self) -> u32 { 44_100 }
    fn resume(&self) -> BackendResult { Ok(()) }
    fn suspend(&self) -> BackendResult { Ok(()) }
    fn schedule(&self, _: EventId, _: &SoundEvent) -> BackendResult { Ok(()) }
    fn release(&self, _: EventId) -> BackendResult { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;

    #[test]
    fn clock_only_moves_while_running() {
        let b = TestBackend::new();
        b.advance(1.0);
        assert_eq!(b.current_time(), 0.0);
        b.resume().unwrap();
        b.advance(1.0);
        assert_eq!(b.current_time(), 1.0);
    }

    #[test]
    fn resume_can_be_made_to_fail() {
        let b = TestBackend::new();
        b.fail_resume(true);
        assert!(b.resume().is_err());
        assert_eq!(b.state(), ContextState::Suspended);
        b.set_state(ContextState::Closed);
        b.fail_resume(false);
        assert!(b.resume().is_err());
        assert!(b.suspend().is_ok());
        assert_eq!(b.state(), ContextState::Closed);
    }

    #[test]
    fn records_schedule_and_release() {
        let b = Arc::new(TestBackend::running());
        let shared = SharedTestBackend(Arc::clone(&b));
        shared.schedule(4, &units::kick(0.5, 0.8)).unwrap();
        shared.release(4).unwrap();
        assert_eq!(b.scheduled_kinds(), vec![UnitKind::Kick]);
        assert_eq!(b.released(), vec![4]);
        assert_eq!(b.count(|op| matches!(op, TestOp::Resume)), 0);
    }
}
