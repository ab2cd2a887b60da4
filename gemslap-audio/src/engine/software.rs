//! Backend that renders events in-process through the [`Mixer`].
//!
//! The engine side (`SoftwareBackend`) and the pull side (`Renderer`, called
//! from the device callback or the export loop) share one mixer. The audio
//! clock is the number of frames rendered while running.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use gemslap_types::ContextState;

use super::backend::{AudioBackend, BackendError, BackendResult};
use crate::dsp::Mixer;
use crate::graph::{EventId, SoundEvent};

fn state_to_u8(state: ContextState) -> u8 {
    match state {
        ContextState::Suspended => 0,
        ContextState::Running => 1,
        ContextState::Interrupted => 2,
        ContextState::Closed => 3,
    }
}

fn state_from_u8(v: u8) -> ContextState {
    match v {
        1 => ContextState::Running,
        2 => ContextState::Interrupted,
        3 => ContextState::Closed,
        _ => ContextState::Suspended,
    }
}

struct Shared {
    mixer: Mutex<Mixer>,
    state: AtomicU8,
    frames: AtomicU64,
    sample_rate: u32,
}

impl Shared {
    fn mixer(&self) -> MutexGuard<'_, Mixer> {
        self.mixer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn state(&self) -> ContextState {
        state_from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, state: ContextState) {
        self.state.store(state_to_u8(state), Ordering::Release);
    }
}

pub struct SoftwareBackend {
    shared: Arc<Shared>,
}

impl SoftwareBackend {
    /// A suspended context rendering at `sample_rate`.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            shared: Arc::new(Shared {
                mixer: Mutex::new(Mixer::new(sample_rate)),
                state: AtomicU8::new(state_to_u8(ContextState::Suspended)),
                frames: AtomicU64::new(0),
                sample_rate,
            }),
        }
    }

    /// Pull side for a device or file writer with `channels` interleaved
    /// channels.
    pub fn renderer(&self, channels: usize) -> Renderer {
        Renderer {
            shared: Arc::clone(&self.shared),
            channels: channels.max(1),
        }
    }
}

impl AudioBackend for SoftwareBackend {
    fn state(&self) -> ContextState {
        self.shared.state()
    }

    fn current_time(&self) -> f64 {
        self.shared.frames.load(Ordering::Acquire) as f64 / self.shared.sample_rate as f64
    }

    fn sample_rate(&self) -> u32 {
        self.shared.sample_rate
    }

    fn resume(&self) -> BackendResult {
        match self.shared.state() {
            ContextState::Closed => Err(BackendError("output device is closed".to_string())),
            _ => {
                self.shared.set_state(ContextState::Running);
                Ok(())
            }
        }
    }

    fn suspend(&self) -> BackendResult {
        if self.shared.state() != ContextState::Closed {
            self.shared.set_state(ContextState::Suspended);
        }
        Ok(())
    }

    fn schedule(&self, id: EventId, event: &SoundEvent) -> BackendResult {
        let now = self.shared.frames.load(Ordering::Acquire);
        self.shared.mixer().add(id, event, now);
        Ok(())
    }

    fn release(&self, id: EventId) -> BackendResult {
        self.shared.mixer().release(id);
        Ok(())
    }
}

/// Fills output buffers and advances the audio clock.
#[derive(Clone)]
pub struct Renderer {
    shared: Arc<Shared>,
    channels: usize,
}

impl Renderer {
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.shared.sample_rate
    }

    /// Report a device-side state change (stream error, device loss).
    pub fn set_state(&self, state: ContextState) {
        self.shared.set_state(state);
    }

    pub fn state(&self) -> ContextState {
        self.shared.state()
    }

    /// Render one interleaved buffer. Silence, and no clock movement, unless
    /// the context is running.
    pub fn render(&self, out: &mut [f32]) {
        if !self.shared.state().is_running() {
            out.iter_mut().for_each(|s| *s = 0.0);
            return;
        }
        let frames = (out.len() / self.channels) as u64;
        let start = self.shared.frames.load(Ordering::Acquire);
        self.shared.mixer().render(out, self.channels, start);
        self.shared.frames.store(start + frames, Ordering::Release);
    }
}
