//! Host (wall-clock) time sources.
//!
//! The engine's timers run on host milliseconds; sounds are placed on the
//! backend's audio clock. Keeping the host clock injectable lets tests and the
//! offline exporter drive time by hand.

use std::sync::{Arc, Mutex};
use std::time::Instant;

pub trait HostClock: Send {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Real time, measured from construction. Copies share the origin.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Arc::new(Mutex::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        if let Ok(mut now) = self.now.lock() {
            *now = ms;
        }
    }

    pub fn advance(&self, ms: f64) {
        if let Ok(mut now) = self.now.lock() {
            *now += ms;
        }
    }
}

impl HostClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.lock().map(|n| *n).unwrap_or(0.0)
    }
}
