//! Game-feedback effects on the SFX bus.

use gemslap_types::{quantize, semitone_freq, UnitKind, PENTATONIC_LADDER};

use super::{Rng, BASS_ROOT_HZ, ROOT_HZ, SILENT};
use crate::graph::{Bus, Filter, FilterKind, Param, SoundEvent, Voice, Waveform};

/// Fragment frequency multipliers, cycled.
const FRAGMENT_RATIOS: [f32; 8] = [6.2, 5.1, 4.3, 3.7, 3.1, 2.6, 2.2, 1.9];
/// Fanfare arpeggio: C Eb F G Bb C.
const FANFARE_NOTES: [i32; 6] = [0, 3, 5, 7, 10, 12];
const FANFARE_SHIMMER: [f32; 3] = [3.1, 5.4, 7.8];
const CLOUD_TONES: usize = 28;

/// A gated blip that starts at `delay`: silent until then, 1 ms attack,
/// exponential decay over `length`.
fn blip(delay: f32, level: f32, length: f32) -> Param {
    Param::constant(0.0)
        .set(delay, 0.0)
        .linear(delay + 0.001, level)
        .exp(delay + length, SILENT)
}

/// Pitch-dropping thud plus a short low-passed noise burst. Louder and
/// (after snapping) higher with `strength`.
pub fn shockwave(t: f64, strength: f32, rng: &mut Rng) -> SoundEvent {
    let strength = if strength.is_finite() {
        strength.clamp(0.0, 2.0)
    } else {
        0.0
    };
    let vol = (0.14 + strength * 0.24).min(0.38);
    let semis = quantize((strength * 5.0).round() as i32 - 12);
    let body = semitone_freq(BASS_ROOT_HZ, semis as f32);

    let thud = Voice::osc(
        Waveform::Sine,
        Param::constant(body * 1.3).exp(0.22, body * 0.4),
        Param::constant(vol).linear(0.015, vol * 0.6).exp(0.3, SILENT),
        0.0,
        0.35,
    );
    let rumble = Voice::noise(
        0.1,
        0.12,
        rng.next_seed(),
        Param::constant(vol * 0.14).exp(0.1, SILENT),
        0.0,
        0.15,
    )
    .through(Filter::new(FilterKind::LowPass, 450.0, 1.0));

    SoundEvent::new(UnitKind::Shockwave, Bus::Sfx, t)
        .voice(thud)
        .voice(rumble)
        .lasting(0.35)
}

/// Low sine landing under the failure jingle.
pub fn failure_thud(t: f64) -> SoundEvent {
    SoundEvent::new(UnitKind::FailureThud, Bus::Sfx, t)
        .voice(Voice::osc(
            Waveform::Sine,
            Param::constant(90.0).exp(0.22, 38.0),
            Param::constant(0.0)
                .set(0.0, 0.0)
                .linear(0.008, 0.09)
                .exp(0.28, SILENT),
            0.0,
            0.32,
        ))
        .lasting(0.32)
}

/// Layered crystal break. Pitch climbs the pentatonic ladder with the
/// crystal's position among `total`, and every call jitters its fragments so
/// rapid breaks never sound identical.
pub fn crystal_shatter(t: f64, index: u32, total: u32, rng: &mut Rng) -> SoundEvent {
    let span = total.saturating_sub(1).max(1);
    let progress = (index as f32 / span as f32).clamp(0.0, 1.0);
    let rung = ((progress * PENTATONIC_LADDER.len() as f32) as usize).min(PENTATONIC_LADDER.len() - 1);
    let freq = semitone_freq(ROOT_HZ, PENTATONIC_LADDER[rung] as f32);
    let vol = 0.30 + progress * 0.10;

    let mut event = SoundEvent::new(UnitKind::CrystalShatter, Bus::Sfx, t);

    // crack
    event.push(
        Voice::noise(0.006, 0.08, rng.next_seed(), Param::constant(vol * 1.6), 0.0, 0.01)
            .through(Filter::new(FilterKind::HighPass, 3000.0 + progress * 2500.0, 0.6)),
    );

    // ringing partials
    for (ratio, gain, length, waveform) in [
        (1.0, 0.38, 0.08, Waveform::Triangle),
        (2.76, 0.16, 0.05, Waveform::Sine),
        (5.4, 0.08, 0.03, Waveform::Sine),
    ] {
        event.push(Voice::osc(
            waveform,
            Param::constant(freq * ratio),
            Param::constant(vol * gain).exp(length, SILENT),
            0.0,
            length + 0.01,
        ));
    }

    // body
    event.push(Voice::osc(
        Waveform::Sine,
        Param::constant(freq * 0.5).exp(0.035, 40.0),
        Param::constant(vol * 0.35).exp(0.04, SILENT),
        0.0,
        0.05,
    ));

    // fragments
    let fragments = 10 + (progress * 3.0) as usize;
    for i in 0..fragments {
        let delay = 0.005 + (i as f32 / fragments as f32).powf(1.8) * 0.38;
        let ratio = FRAGMENT_RATIOS[i % FRAGMENT_RATIOS.len()];
        let jitter = 0.93 + rng.next_f32() * 0.14;
        let level = vol * (0.14 - i as f32 * 0.007) * (1.0 + progress * 0.3);
        event.push(Voice::osc(
            Waveform::Sine,
            Param::constant(freq * ratio * jitter),
            blip(delay, level.max(0.003), 0.022),
            delay,
            delay + 0.030,
        ));
    }

    // dust
    let dust = if progress > 0.5 { 5 } else { 4 };
    for i in 0..dust {
        let delay = 0.025 + i as f32 * 0.055;
        event.push(Voice::osc(
            Waveform::Sine,
            Param::constant(freq * (8.0 + i as f32 * 1.8)),
            blip(delay, vol * 0.032, 0.09),
            delay,
            delay + 0.10,
        ));
    }

    let lifetime = event.last_stop();
    event.lasting(lifetime)
}

/// Level-clear fanfare: a soft crack, a rising pentatonic arpeggio with a
/// shimmer burst on each note, then a cloud of short high tones.
pub fn level_clear_fanfare(t: f64, rng: &mut Rng) -> SoundEvent {
    let mut event = SoundEvent::new(UnitKind::LevelClearFanfare, Bus::Sfx, t);

    event.push(
        Voice::noise(0.006, 0.06, rng.next_seed(), Param::constant(0.14), 0.0, 0.008)
            .through(Filter::new(FilterKind::HighPass, 5500.0, 0.5)),
    );

    for (i, &semis) in FANFARE_NOTES.iter().enumerate() {
        let delay = i as f32 * 0.068;
        let freq = semitone_freq(ROOT_HZ, semis as f32);
        let decay = 0.32 - i as f32 * 0.008;
        event.push(Voice::osc(
            Waveform::Sine,
            Param::constant(freq),
            Param::constant(0.0)
                .set(delay, 0.0)
                .linear(delay + 0.004, 0.10 + i as f32 * 0.008)
                .exp(delay + decay, SILENT),
            delay,
            delay + decay + 0.01,
        ));

        for (j, &mult) in FANFARE_SHIMMER.iter().enumerate() {
            let s_delay = delay + 0.002 + j as f32 * 0.006;
            let s_freq = freq * mult * (0.97 + rng.next_f32() * 0.06);
            let s_len = 0.055 + j as f32 * 0.018;
            event.push(Voice::osc(
                Waveform::Sine,
                Param::constant(s_freq),
                blip(s_delay, 0.020 - j as f32 * 0.004, s_len),
                s_delay,
                s_delay + s_len + 0.005,
            ));
        }
    }

    for i in 0..CLOUD_TONES {
        let delay = 0.05 + (i as f32 / (CLOUD_TONES - 1) as f32).powf(1.4) * 0.85;
        let rung = PENTATONIC_LADDER[i % PENTATONIC_LADDER.len()];
        let octave = (i / PENTATONIC_LADDER.len()) as i32;
        let freq = semitone_freq(ROOT_HZ, (rung + octave * 12) as f32);
        let length = 0.08 + rng.next_f32() * 0.10;
        let level = 0.024 * (1.0 - i as f32 * 0.022).max(0.3);
        event.push(Voice::osc(
            Waveform::Sine,
            Param::constant(freq),
            blip(delay, level, length),
            delay,
            delay + length + 0.005,
        ));
    }

    let lifetime = event.last_stop();
    event.lasting(lifetime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_crystals_are_higher_and_louder() {
        let mut rng = Rng::default();
        let first = crystal_shatter(0.0, 0, 8, &mut rng);
        let last = crystal_shatter(0.0, 7, 8, &mut rng);
        let pitch = |ev: &SoundEvent| match &ev.voices[1].source {
            crate::graph::Source::Oscillator { frequency, .. } => frequency.initial,
            _ => 0.0,
        };
        assert!(pitch(&last) > pitch(&first));
        assert!(last.voices[1].gain.initial > first.voices[1].gain.initial);
    }

    #[test]
    fn shatter_layer_counts() {
        let mut rng = Rng::default();
        // crack + 3 partials + body + 10 fragments + 4 dust
        assert_eq!(crystal_shatter(0.0, 0, 5, &mut rng).voices.len(), 19);
        // crack + 3 partials + body + 13 fragments + 5 dust
        assert_eq!(crystal_shatter(0.0, 4, 5, &mut rng).voices.len(), 23);
    }

    #[test]
    fn shatter_tolerates_degenerate_counts() {
        let mut rng = Rng::default();
        let lone = crystal_shatter(0.0, 0, 1, &mut rng);
        let zero = crystal_shatter(0.0, 0, 0, &mut rng);
        let overflow = crystal_shatter(0.0, 40, 3, &mut rng);
        assert_eq!(lone.voices.len(), zero.voices.len());
        assert_eq!(overflow.voices.len(), 23);
        assert!(overflow.lifetime < 0.7);
    }

    #[test]
    fn shatters_differ_between_calls() {
        let mut rng = Rng::default();
        let a = crystal_shatter(0.0, 2, 5, &mut rng);
        let b = crystal_shatter(0.0, 2, 5, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn fanfare_has_arpeggio_shimmer_and_cloud() {
        let mut rng = Rng::default();
        let ev = level_clear_fanfare(0.0, &mut rng);
        // crack + 6 notes * (1 + 3 shimmers) + 28 cloud tones
        assert_eq!(ev.voices.len(), 1 + 24 + 28);
        assert!(ev.lifetime > 0.9 && ev.lifetime < 1.2);
        assert!(ev.kind.is_exempt());
    }

    #[test]
    fn shockwave_volume_is_capped() {
        let mut rng = Rng::default();
        let soft = shockwave(0.0, 0.0, &mut rng);
        let hard = shockwave(0.0, 50.0, &mut rng);
        assert!((soft.voices[0].gain.initial - 0.14).abs() < 1e-6);
        assert!((hard.voices[0].gain.initial - 0.38).abs() < 1e-6);
        let nan = shockwave(0.0, f32::NAN, &mut rng);
        assert!(nan.voices[0].gain.initial.is_finite());
    }
}
