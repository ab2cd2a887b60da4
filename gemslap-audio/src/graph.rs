//! Sound-event graph model.
//!
//! A synthesis unit produces one [`SoundEvent`]: a handful of voices, each a
//! source through an optional filter and a gain envelope, summed into an
//! optional event filter and then a bus. Backends realise events however
//! they like; the software renderer plays them sample by sample.
//!
//! All times inside an event are seconds relative to the event start.

use gemslap_types::UnitKind;

/// Backend handle for a scheduled event.
pub type EventId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamEvent {
    /// Jump to `value` at `time`.
    Set { time: f32, value: f32 },
    /// Ramp linearly from the previous event to `value` at `time`.
    Linear { time: f32, value: f32 },
    /// Ramp exponentially from the previous event to `value` at `time`.
    Exponential { time: f32, value: f32 },
}

impl ParamEvent {
    pub fn time(&self) -> f32 {
        match *self {
            ParamEvent::Set { time, .. }
            | ParamEvent::Linear { time, .. }
            | ParamEvent::Exponential { time, .. } => time,
        }
    }
}

/// An automatable value with an initial level and a timeline of events.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub initial: f32,
    pub events: Vec<ParamEvent>,
}

impl Param {
    pub fn constant(value: f32) -> Self {
        Self {
            initial: value,
            events: Vec::new(),
        }
    }

    pub fn set(mut self, time: f32, value: f32) -> Self {
        self.events.push(ParamEvent::Set { time, value });
        self
    }

    pub fn linear(mut self, time: f32, value: f32) -> Self {
        self.events.push(ParamEvent::Linear { time, value });
        self
    }

    pub fn exp(mut self, time: f32, value: f32) -> Self {
        self.events.push(ParamEvent::Exponential { time, value });
        self
    }

    pub fn is_constant(&self) -> bool {
        self.events.is_empty()
    }

    /// Value at `t`. Ramps start from the previous event's time and value
    /// (or from 0 s and the initial value); after the last event the final
    /// value holds. An exponential ramp across zero or a sign change holds
    /// the previous value until the ramp's end.
    pub fn value_at(&self, t: f32) -> f32 {
        let mut prev_t = 0.0_f32;
        let mut prev_v = self.initial;
        for ev in &self.events {
            match *ev {
                ParamEvent::Set { time, value } => {
                    if t < time {
                        return prev_v;
                    }
                    prev_t = time;
                    prev_v = value;
                }
                ParamEvent::Linear { time, value } => {
                    if t < time {
                        let span = time - prev_t;
                        if span <= 0.0 {
                            return value;
                        }
                        let frac = ((t - prev_t) / span).max(0.0);
                        return prev_v + (value - prev_v) * frac;
                    }
                    prev_t = time;
                    prev_v = value;
                }
                ParamEvent::Exponential { time, value } => {
                    if t < time {
                        let span = time - prev_t;
                        if span <= 0.0 {
                            return value;
                        }
                        if prev_v == 0.0 || prev_v * value <= 0.0 {
                            return prev_v;
                        }
                        let frac = ((t - prev_t) / span).max(0.0);
                        return prev_v * (value / prev_v).powf(frac);
                    }
                    prev_t = time;
                    prev_v = value;
                }
            }
        }
        prev_v
    }

    /// Time of the last automation event (0 for a constant).
    pub fn end_time(&self) -> f32 {
        self.events.iter().map(ParamEvent::time).fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Oscillator { waveform: Waveform, frequency: Param },
    /// White noise with an exponential decay baked in: sample `i` of `n` is
    /// scaled by `exp(-i / (n * decay))`. Plays once, then silence.
    Noise { length: f32, decay: f32, seed: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    LowPass,
    HighPass,
    BandPass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub cutoff: Param,
    pub q: f32,
}

impl Filter {
    pub fn new(kind: FilterKind, cutoff: f32, q: f32) -> Self {
        Self {
            kind,
            cutoff: Param::constant(cutoff),
            q,
        }
    }

    pub fn automated(kind: FilterKind, cutoff: Param, q: f32) -> Self {
        Self { kind, cutoff, q }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub source: Source,
    pub filter: Option<Filter>,
    pub gain: Param,
    pub start: f32,
    pub stop: f32,
}

impl Voice {
    pub fn osc(waveform: Waveform, frequency: Param, gain: Param, start: f32, stop: f32) -> Self {
        Self {
            source: Source::Oscillator { waveform, frequency },
            filter: None,
            gain,
            start,
            stop,
        }
    }

    pub fn noise(length: f32, decay: f32, seed: u64, gain: Param, start: f32, stop: f32) -> Self {
        Self {
            source: Source::Noise { length, decay, seed },
            filter: None,
            gain,
            start,
            stop,
        }
    }

    pub fn through(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Mix destinations. The first five feed the music bus; `Sfx` feeds the
/// limited effects master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bus {
    Bass,
    Drums,
    HiHat,
    Chord,
    Texture,
    Sfx,
}

impl Bus {
    pub const ALL: [Bus; 6] = [Bus::Bass, Bus::Drums, Bus::HiHat, Bus::Chord, Bus::Texture, Bus::Sfx];

    pub fn is_music(self) -> bool {
        self != Bus::Sfx
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoundEvent {
    pub kind: UnitKind,
    pub bus: Bus,
    /// Audio-clock seconds.
    pub start: f64,
    /// Seconds from `start` until every voice has stopped.
    pub lifetime: f32,
    pub voices: Vec<Voice>,
    /// Applied to the summed voices before the bus.
    pub filter: Option<Filter>,
}

impl SoundEvent {
    pub fn new(kind: UnitKind, bus: Bus, start: f64) -> Self {
        Self {
            kind,
            bus,
            start,
            lifetime: 0.0,
            voices: Vec::new(),
            filter: None,
        }
    }

    pub fn voice(mut self, voice: Voice) -> Self {
        self.voices.push(voice);
        self
    }

    pub fn push(&mut self, voice: Voice) {
        self.voices.push(voice);
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the lifetime the unit computed from its envelopes.
    pub fn lasting(mut self, lifetime: f32) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Latest voice stop time.
    pub fn last_stop(&self) -> f32 {
        self.voices.iter().map(|v| v.stop).fold(0.0, f32::max)
    }
}
