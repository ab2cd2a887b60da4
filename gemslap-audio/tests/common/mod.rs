#![allow(dead_code)]
//! Simulated-time harness for gemslap-audio integration tests.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use gemslap_audio::engine::backend::{SharedTestBackend, TestBackend};
use gemslap_audio::{AudioEngine, EngineConfig, ManualClock};
use gemslap_types::{
    bass_pattern, pad_pattern, perc_pattern, AudioFeedback, PadVoicing, UnitKind,
};

/// An engine on a manual host clock and a recording backend whose audio
/// clock advances with it (while running).
pub struct Sim {
    pub engine: AudioEngine,
    pub backend: Arc<TestBackend>,
    pub clock: ManualClock,
    feedback_rx: Receiver<AudioFeedback>,
    pub feedback: Vec<AudioFeedback>,
}

impl Sim {
    /// Running context, initialised engine, default config.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let backend = Arc::new(TestBackend::running());
        let clock = ManualClock::new(0.0);
        let (tx, rx) = mpsc::channel();
        let mut engine = AudioEngine::new(
            Box::new(SharedTestBackend(Arc::clone(&backend))),
            Box::new(clock.clone()),
            config,
        );
        engine.set_feedback(tx);
        engine.init();
        let mut sim = Self {
            engine,
            backend,
            clock,
            feedback_rx: rx,
            feedback: Vec::new(),
        };
        sim.pump();
        sim
    }

    /// Budget large enough that nothing is ever dropped.
    pub fn unbounded() -> Self {
        Self::with_config(EngineConfig {
            unit_ceiling: 100_000,
            ..EngineConfig::default()
        })
    }

    /// Collect pending feedback.
    pub fn pump(&mut self) {
        self.feedback.extend(self.feedback_rx.try_iter());
    }

    /// Advance host and audio time in 1 ms steps, polling after each.
    pub fn advance_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.clock.advance(1.0);
            self.backend.advance(0.001);
            self.engine.poll();
        }
        self.pump();
    }

    /// Advance until `n` steps have fired since the start of the sim, or
    /// panic after `limit_ms`.
    pub fn advance_until_steps(&mut self, n: usize, limit_ms: u32) {
        for _ in 0..limit_ms {
            if self.fired_steps().len() >= n {
                return;
            }
            self.advance_ms(1);
        }
        panic!("only {} of {} steps fired", self.fired_steps().len(), n);
    }

    /// (step, loop, time) of every StepFired so far.
    pub fn fired_steps(&self) -> Vec<(usize, u64, f64)> {
        self.feedback
            .iter()
            .filter_map(|msg| match msg {
                AudioFeedback::StepFired {
                    step,
                    loop_count,
                    time,
                    ..
                } => Some((*step, *loop_count, *time)),
                _ => None,
            })
            .collect()
    }

    pub fn count_feedback<F: Fn(&AudioFeedback) -> bool>(&self, f: F) -> usize {
        self.feedback.iter().filter(|m| f(*m)).count()
    }
}

/// Units a step should trigger, in firing order.
pub fn expected_kinds(style: usize, step: usize) -> Vec<UnitKind> {
    let mut kinds = Vec::new();
    if bass_pattern(style)[step].is_some() {
        kinds.push(UnitKind::SubBass);
    }
    if let Some(pad) = pad_pattern(style)[step] {
        kinds.push(match pad.voicing {
            PadVoicing::Sustain => UnitKind::WarblePad,
            PadVoicing::Stab => UnitKind::ChordStab,
        });
    }
    let perc = perc_pattern(style);
    if perc.kick[step] > 0.0 {
        kinds.push(UnitKind::Kick);
    }
    if perc.snare[step] > 0.0 {
        kinds.push(UnitKind::TapeSnap);
    }
    if perc.hihat[step] != 0.0 {
        kinds.push(UnitKind::HiHat {
            open: perc.hihat[step] < 0.0,
        });
    }
    if perc.texture[step] > 0.0 {
        kinds.push(UnitKind::TextureGrain);
    }
    kinds
}
