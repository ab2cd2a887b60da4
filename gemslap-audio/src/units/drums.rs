use gemslap_types::UnitKind;

use super::{Rng, SILENT};
use crate::graph::{Bus, Filter, FilterKind, Param, SoundEvent, Voice, Waveform};

/// Falling sine body plus a short triangle click.
pub fn kick(t: f64, vel: f32) -> SoundEvent {
    let body = Voice::osc(
        Waveform::Sine,
        Param::constant(55.0 + vel * 15.0).exp(0.2, 28.0),
        Param::constant(0.0)
            .set(0.0, 0.0)
            .linear(0.006, vel * 0.6)
            .exp(0.08, vel * 0.2)
            .exp(0.45, SILENT),
        0.0,
        0.5,
    );
    let click = Voice::osc(
        Waveform::Triangle,
        Param::constant(300.0 + vel * 60.0).exp(0.025, 120.0),
        Param::constant(vel * 0.35).exp(0.04, SILENT),
        0.0,
        0.06,
    );
    SoundEvent::new(UnitKind::Kick, Bus::Drums, t)
        .voice(body)
        .voice(click)
        .lasting(0.5)
}

/// Snare stand-in: low-passed noise snap over a quick sine thump.
pub fn tape_snap(t: f64, vel: f32, rng: &mut Rng) -> SoundEvent {
    let snap = Voice::noise(
        0.04,
        0.2,
        rng.next_seed(),
        Param::constant(vel * 0.35).exp(0.05, SILENT),
        0.0,
        0.06,
    )
    .through(Filter::new(FilterKind::LowPass, 400.0, 0.8));
    let thump = Voice::osc(
        Waveform::Sine,
        Param::constant(180.0).exp(0.02, 100.0),
        Param::constant(vel * 0.12).exp(0.03, SILENT),
        0.0,
        0.04,
    );
    SoundEvent::new(UnitKind::TapeSnap, Bus::Drums, t)
        .voice(snap)
        .voice(thump)
        .lasting(0.07)
}

/// High-passed noise with two tuned partials. The open hat sits lower and
/// rings longer.
pub fn hihat(t: f64, vel: f32, open: bool, rng: &mut Rng) -> SoundEvent {
    let (dur, decay, noise_hp) = if open {
        (0.14, 0.38, 6000.0)
    } else {
        (0.04, 0.1, 8500.0)
    };
    let (metal_hz, metal_bp, metal_decay, metal_stop) = if open {
        (3200.0, 3500.0, 0.06, 0.07)
    } else {
        (4800.0, 5200.0, 0.015, 0.02)
    };
    let (bright_hz, bright_decay, bright_stop) = if open {
        (7800.0, 0.04, 0.05)
    } else {
        (10200.0, 0.01, 0.015)
    };

    let noise = Voice::noise(
        dur,
        decay,
        rng.next_seed(),
        Param::constant(vel * 0.30).exp(dur, SILENT),
        0.0,
        dur + 0.01,
    )
    .through(Filter::new(FilterKind::HighPass, noise_hp, 0.5));
    let metal = Voice::osc(
        Waveform::Square,
        Param::constant(metal_hz),
        Param::constant(vel * 0.07).exp(metal_decay, SILENT),
        0.0,
        metal_stop,
    )
    .through(Filter::new(FilterKind::BandPass, metal_bp, 3.5));
    let bright = Voice::osc(
        Waveform::Sine,
        Param::constant(bright_hz),
        Param::constant(vel * 0.04).exp(bright_decay, SILENT),
        0.0,
        bright_stop,
    );

    SoundEvent::new(UnitKind::HiHat { open }, Bus::HiHat, t)
        .voice(noise)
        .voice(metal)
        .voice(bright)
        .lasting(dur + 0.02)
}

/// Quiet band-passed noise puff for ambience.
pub fn texture_grain(t: f64, vel: f32, rng: &mut Rng) -> SoundEvent {
    let grain = Voice::noise(
        0.1,
        0.5,
        rng.next_seed(),
        Param::constant(0.0)
            .set(0.0, 0.0)
            .linear(0.02, vel)
            .exp(0.08, SILENT),
        0.0,
        0.12,
    )
    .through(Filter::new(FilterKind::BandPass, 500.0, 0.5));
    SoundEvent::new(UnitKind::TextureGrain, Bus::Texture, t)
        .voice(grain)
        .lasting(0.12)
}

/// Count-in blip, brighter and louder when `accent` is set.
pub fn count_click(t: f64, accent: bool) -> SoundEvent {
    let (from, to, level) = if accent {
        (1200.0, 800.0, 0.4)
    } else {
        (900.0, 600.0, 0.25)
    };
    let blip = Voice::osc(
        Waveform::Triangle,
        Param::constant(from).exp(0.03, to),
        Param::constant(level).exp(0.08, SILENT),
        0.0,
        0.1,
    )
    .through(Filter::new(FilterKind::BandPass, 1000.0, 2.0));
    SoundEvent::new(UnitKind::CountClick, Bus::Sfx, t)
        .voice(blip)
        .lasting(0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_hat_is_lower_and_longer() {
        let mut rng = Rng::default();
        let closed = hihat(0.0, 0.3, false, &mut rng);
        let open = hihat(0.0, 0.3, true, &mut rng);
        assert!(open.lifetime > closed.lifetime);
        let cutoff = |ev: &SoundEvent| ev.voices[0].filter.as_ref().map(|f| f.cutoff.initial);
        assert!(cutoff(&open) < cutoff(&closed));
        assert_eq!(open.kind, UnitKind::HiHat { open: true });
    }

    #[test]
    fn kick_pitch_drops() {
        let ev = kick(0.0, 0.7);
        match &ev.voices[0].source {
            crate::graph::Source::Oscillator { frequency, .. } => {
                assert!(frequency.value_at(0.0) > frequency.value_at(0.2));
                assert!((frequency.value_at(0.3) - 28.0).abs() < 1e-4);
            }
            other => panic!("unexpected source {:?}", other),
        }
        assert!(ev.last_stop() <= ev.lifetime);
    }

    #[test]
    fn noise_seeds_differ_per_hit() {
        let mut rng = Rng::default();
        let a = tape_snap(0.0, 0.5, &mut rng);
        let b = tape_snap(0.0, 0.5, &mut rng);
        assert_ne!(a.voices[0].source, b.voices[0].source);
    }

    #[test]
    fn music_units_route_to_music_buses() {
        let mut rng = Rng::default();
        assert_eq!(kick(0.0, 0.5).bus, Bus::Drums);
        assert_eq!(texture_grain(0.0, 0.04, &mut rng).bus, Bus::Texture);
        assert_eq!(count_click(0.0, true).bus, Bus::Sfx);
    }
}
