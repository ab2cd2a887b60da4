//! Bus mixing: music buses through a shared reverb, SFX through a limiter.

use std::collections::BTreeMap;

use super::biquad::Biquad;
use super::limiter::Limiter;
use super::reverb::Reverb;
use super::voice::RenderEvent;
use crate::graph::{Bus, EventId, FilterKind, SoundEvent};

const REVERB_WET: f32 = 0.14;
const MUSIC_OUT: f32 = 0.82;
const SFX_GAIN: f32 = 0.78;

/// Gain, reverb send and optional low-pass for one bus.
struct BusStrip {
    gain: f32,
    send: f32,
    lowpass: Option<Biquad>,
}

impl BusStrip {
    fn for_bus(bus: Bus, sample_rate: f32) -> Self {
        let lp = |cutoff, q| Some(Biquad::new(FilterKind::LowPass, cutoff, q, sample_rate));
        match bus {
            Bus::Bass => Self { gain: 0.44, send: 0.0, lowpass: lp(500.0, 0.7) },
            Bus::Drums => Self { gain: 0.38, send: 0.0, lowpass: None },
            Bus::HiHat => Self { gain: 0.26, send: 0.28, lowpass: None },
            Bus::Chord => Self { gain: 0.38, send: 0.22, lowpass: lp(1500.0, 0.7) },
            Bus::Texture => Self { gain: 0.10, send: 0.35, lowpass: None },
            Bus::Sfx => Self { gain: SFX_GAIN, send: 0.0, lowpass: None },
        }
    }

    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let x = match self.lowpass.as_mut() {
            Some(f) => f.process(input),
            None => input,
        };
        x * self.gain
    }
}

fn bus_index(bus: Bus) -> usize {
    match bus {
        Bus::Bass => 0,
        Bus::Drums => 1,
        Bus::HiHat => 2,
        Bus::Chord => 3,
        Bus::Texture => 4,
        Bus::Sfx => 5,
    }
}

/// Stereo output of the music master and the SFX master.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Masters {
    music: (f32, f32),
    sfx: (f32, f32),
}

/// Owns every event being rendered and the master chain.
pub struct Mixer {
    sample_rate: u32,
    events: BTreeMap<EventId, RenderEvent>,
    strips: Vec<BusStrip>,
    reverb: Reverb,
    limiter: Limiter,
}

impl Mixer {
    pub fn new(sample_rate: u32) -> Self {
        let sr = sample_rate as f32;
        Self {
            sample_rate,
            events: BTreeMap::new(),
            strips: Bus::ALL.iter().map(|&b| BusStrip::for_bus(b, sr)).collect(),
            reverb: Reverb::new(sample_rate),
            limiter: Limiter::new(sample_rate),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Queue `event`. A start already in the past plays from `now_frame`.
    pub fn add(&mut self, id: EventId, event: &SoundEvent, now_frame: u64) {
        let wanted = (event.start.max(0.0) * self.sample_rate as f64).round() as u64;
        let start = wanted.max(now_frame);
        self.events
            .insert(id, RenderEvent::new(event, start, self.sample_rate));
    }

    /// Drop an event's render state. Unknown ids are ignored.
    pub fn release(&mut self, id: EventId) {
        self.events.remove(&id);
    }

    pub fn active(&self) -> usize {
        self.events.len()
    }

    /// Fill an interleaved buffer starting at absolute `frame`. Mono and
    /// stereo layouts get real channels; extra channels repeat left/right.
    pub fn render(&mut self, out: &mut [f32], channels: usize, frame: u64) {
        let channels = channels.max(1);
        for (i, chunk) in out.chunks_mut(channels).enumerate() {
            let masters = self.mix_frame(frame + i as u64);
            let left = masters.music.0 + masters.sfx.0;
            let right = masters.music.1 + masters.sfx.1;
            if channels == 1 {
                chunk[0] = (left + right) * 0.5;
            } else {
                for (c, sample) in chunk.iter_mut().enumerate() {
                    *sample = if c % 2 == 0 { left } else { right };
                }
            }
        }

        let end = frame + (out.len() / channels) as u64;
        self.events.retain(|_, ev| !ev.finished(end));
    }

    /// Both master paths for one frame, before they are summed.
    fn mix_frame(&mut self, frame: u64) -> Masters {
        let mut buses = [0.0f32; 6];
        for event in self.events.values_mut() {
            buses[bus_index(event.bus)] += event.render(frame);
        }

        let mut dry = 0.0;
        let mut send = 0.0;
        for (strip, &input) in self.strips.iter_mut().zip(&buses[..5]) {
            let y = strip.process(input);
            dry += y;
            send += y * strip.send;
        }
        let (wet_l, wet_r) = self.reverb.process(send);
        let music = (
            (dry + wet_l * REVERB_WET) * MUSIC_OUT,
            (dry + wet_r * REVERB_WET) * MUSIC_OUT,
        );

        let sfx = self.strips[bus_index(Bus::Sfx)].process(buses[bus_index(Bus::Sfx)]);
        Masters {
            music,
            sfx: self.limiter.process(sfx, sfx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{self, Rng};

    #[test]
    fn silence_without_events() {
        let mut mixer = Mixer::new(8000);
        let mut buf = vec![1.0; 256];
        mixer.render(&mut buf, 2, 0);
        assert!(buf.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn finished_events_are_collected() {
        let mut mixer = Mixer::new(8000);
        mixer.add(1, &units::kick(0.0, 0.8), 0);
        assert_eq!(mixer.active(), 1);
        let mut buf = vec![0.0; 2 * 2048];
        mixer.render(&mut buf, 2, 0);
        assert!(buf.iter().any(|&s| s.abs() > 0.01));
        assert_eq!(mixer.active(), 1);
        mixer.render(&mut buf, 2, 2048);
        assert_eq!(mixer.active(), 0);
    }

    #[test]
    fn late_event_starts_now() {
        let mut mixer = Mixer::new(8000);
        mixer.add(7, &units::count_click(0.0, true), 1000);
        let mut buf = vec![0.0; 64];
        mixer.render(&mut buf, 1, 1000);
        assert!(buf.iter().any(|&s| s != 0.0));
        mixer.release(7);
        assert_eq!(mixer.active(), 0);
    }

    #[test]
    fn sfx_peaks_leave_music_untouched() {
        let mut rng = Rng::new(9);
        let mut plain = Mixer::new(8000);
        let mut loud = Mixer::new(8000);
        for mixer in [&mut plain, &mut loud] {
            mixer.add(1, &units::kick(0.0, 1.0), 0);
            mixer.add(2, &units::chord_stab(0.0, &[0, 3, 7], 0.9), 0);
        }
        for id in 10..16 {
            loud.add(id, &units::crystal_shatter(0.0, 4, 5, &mut rng), 0);
        }

        let mut sfx_peak = 0.0f32;
        for f in 0..4000 {
            let a = plain.mix_frame(f);
            let b = loud.mix_frame(f);
            assert_eq!(a.music, b.music, "frame {}", f);
            assert_eq!(a.sfx, (0.0, 0.0));
            sfx_peak = sfx_peak.max(b.sfx.0.abs());
        }
        assert!(sfx_peak > 0.05, "sfx peak {}", sfx_peak);
    }

    #[test]
    fn low_end_is_dry_and_upper_buses_send() {
        let send = |bus| BusStrip::for_bus(bus, 8000.0).send;
        assert_eq!(send(Bus::Bass), 0.0);
        assert_eq!(send(Bus::Drums), 0.0);
        assert_eq!(send(Bus::Sfx), 0.0);
        assert_eq!(send(Bus::HiHat), 0.28);
        assert_eq!(send(Bus::Chord), 0.22);
        assert_eq!(send(Bus::Texture), 0.35);
    }
}
