//! Sample-level playback of one [`SoundEvent`].

use std::f32::consts::TAU;

use super::biquad::Biquad;
use crate::graph::{Bus, Filter, Param, SoundEvent, Source, Waveform};
use crate::units::Rng;

/// Automated cutoffs are re-evaluated this often.
const FILTER_UPDATE_FRAMES: u64 = 32;

struct FilterState {
    spec: Filter,
    biquad: Biquad,
}

impl FilterState {
    fn new(spec: &Filter, sample_rate: f32) -> Self {
        Self {
            biquad: Biquad::new(spec.kind, spec.cutoff.initial, spec.q, sample_rate),
            spec: spec.clone(),
        }
    }

    #[inline]
    fn process(&mut self, input: f32, local_frame: u64, sample_rate: f32) -> f32 {
        if !self.spec.cutoff.is_constant() && local_frame % FILTER_UPDATE_FRAMES == 0 {
            let t = local_frame as f32 / sample_rate;
            let cutoff = self.spec.cutoff.value_at(t);
            self.biquad.set(self.spec.kind, cutoff, self.spec.q, sample_rate);
        }
        self.biquad.process(input)
    }
}

enum SourceState {
    Osc {
        waveform: Waveform,
        frequency: Param,
        phase: f32,
    },
    Noise {
        buffer: Vec<f32>,
        pos: usize,
    },
}

impl SourceState {
    fn new(source: &Source, sample_rate: f32) -> Self {
        match source {
            Source::Oscillator { waveform, frequency } => SourceState::Osc {
                waveform: *waveform,
                frequency: frequency.clone(),
                phase: 0.0,
            },
            Source::Noise { length, decay, seed } => {
                let len = ((length.max(0.0) * sample_rate) as usize).max(1);
                let tau = (len as f32 * decay.max(1e-4)).max(1e-3);
                let mut rng = Rng::new(*seed);
                let buffer = (0..len)
                    .map(|i| (rng.next_f32() * 2.0 - 1.0) * (-(i as f32) / tau).exp())
                    .collect();
                SourceState::Noise { buffer, pos: 0 }
            }
        }
    }

    #[inline]
    fn next(&mut self, t: f32, sample_rate: f32) -> f32 {
        match self {
            SourceState::Osc {
                waveform,
                frequency,
                phase,
            } => {
                let freq = frequency.value_at(t);
                if !(freq > 0.0 && freq < sample_rate * 0.5) {
                    return 0.0;
                }
                let out = match waveform {
                    Waveform::Sine => (*phase * TAU).sin(),
                    Waveform::Triangle => 1.0 - 4.0 * (*phase - 0.5).abs(),
                    Waveform::Square => {
                        if *phase < 0.5 {
                            1.0
                        } else {
                            -1.0
                        }
                    }
                };
                *phase += freq / sample_rate;
                *phase -= phase.floor();
                out
            }
            SourceState::Noise { buffer, pos } => {
                let out = buffer.get(*pos).copied().unwrap_or(0.0);
                *pos += 1;
                out
            }
        }
    }
}

struct VoiceState {
    source: SourceState,
    filter: Option<FilterState>,
    gain: Param,
    start: u64,
    stop: u64,
}

/// A scheduled event being rendered. Frames are absolute audio-clock frames.
pub struct RenderEvent {
    pub bus: Bus,
    start_frame: u64,
    end_frame: u64,
    voices: Vec<VoiceState>,
    filter: Option<FilterState>,
    sample_rate: f32,
}

impl RenderEvent {
    /// Prepare `event` to start at `start_frame`.
    pub fn new(event: &SoundEvent, start_frame: u64, sample_rate: u32) -> Self {
        let sr = sample_rate as f32;
        let to_frames = |secs: f32| (secs.max(0.0) * sr).round() as u64;
        let voices: Vec<VoiceState> = event
            .voices
            .iter()
            .map(|v| VoiceState {
                source: SourceState::new(&v.source, sr),
                filter: v.filter.as_ref().map(|f| FilterState::new(f, sr)),
                gain: v.gain.clone(),
                start: to_frames(v.start),
                stop: to_frames(v.stop),
            })
            .collect();
        let last = voices.iter().map(|v| v.stop).max().unwrap_or(0);
        Self {
            bus: event.bus,
            start_frame,
            end_frame: start_frame.saturating_add(last.max(to_frames(event.lifetime))),
            voices,
            filter: event.filter.as_ref().map(|f| FilterState::new(f, sr)),
            sample_rate: sr,
        }
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    /// Past its last voice; can be dropped without a click.
    pub fn finished(&self, frame: u64) -> bool {
        frame >= self.end_frame
    }

    /// Mono output for absolute `frame`.
    pub fn render(&mut self, frame: u64) -> f32 {
        if frame < self.start_frame || frame >= self.end_frame {
            return 0.0;
        }
        let local = frame - self.start_frame;
        let t = local as f32 / self.sample_rate;
        let sr = self.sample_rate;

        let mut mix = 0.0;
        for voice in &mut self.voices {
            if local < voice.start || local >= voice.stop {
                continue;
            }
            let raw = voice.source.next(t, sr);
            let filtered = match voice.filter.as_mut() {
                Some(f) => f.process(raw, local, sr),
                None => raw,
            };
            mix += filtered * voice.gain.value_at(t);
        }
        match self.filter.as_mut() {
            Some(f) => f.process(mix, local, sr),
            None => mix,
        }
    }
}
