use gemslap_types::{semitone_freq, UnitKind};

use super::{CHORD_ROOT_HZ, SILENT};
use crate::graph::{Bus, Filter, FilterKind, Param, SoundEvent, Voice, Waveform};

const PAD_LENGTH: f32 = 2.0;
const STAB_LENGTH: f32 = 0.20;

/// Per-note level, normalised so chords of any size sum to a similar
/// loudness. Chords under three notes are not boosted.
fn note_level(vel: f32, scale: f32, notes: usize) -> f32 {
    vel * scale / notes.max(3) as f32
}

/// Slow warble pad: each note is a triangle plus a detuned sine pair for
/// chorus, with a quieter octave on top.
pub fn warble_pad(t: f64, pitches: &[i8], vel: f32) -> SoundEvent {
    let level = note_level(vel, 0.22, pitches.len());
    let stop = PAD_LENGTH + 0.05;
    let mut event =
        SoundEvent::new(UnitKind::WarblePad, Bus::Chord, t).lasting(PAD_LENGTH + 0.1);

    for &semi in pitches {
        let freq = semitone_freq(CHORD_ROOT_HZ, f32::from(semi));
        let body = Param::constant(0.0)
            .set(0.0, 0.0)
            .linear(0.2, level)
            .set(PAD_LENGTH * 0.5, level)
            .exp(PAD_LENGTH, SILENT);
        let octave = Param::constant(0.0)
            .set(0.0, 0.0)
            .linear(0.15, level * 0.35)
            .exp(PAD_LENGTH * 0.6, SILENT);

        for (waveform, ratio) in [
            (Waveform::Triangle, 1.0),
            (Waveform::Sine, 1.005),
            (Waveform::Sine, 0.995),
        ] {
            event.push(Voice::osc(waveform, Param::constant(freq * ratio), body.clone(), 0.0, stop));
        }
        event.push(Voice::osc(Waveform::Sine, Param::constant(freq * 2.0), octave, 0.0, stop));
    }
    event
}

/// Short percussive chord through its own 2.4 kHz low-pass.
pub fn chord_stab(t: f64, pitches: &[i8], vel: f32) -> SoundEvent {
    let level = note_level(vel, 0.28, pitches.len());
    let mut event = SoundEvent::new(UnitKind::ChordStab, Bus::Chord, t)
        .with_filter(Filter::new(FilterKind::LowPass, 2400.0, 1.0))
        .lasting(STAB_LENGTH + 0.1);

    for &semi in pitches {
        let freq = semitone_freq(CHORD_ROOT_HZ, f32::from(semi));
        event.push(Voice::osc(
            Waveform::Triangle,
            Param::constant(freq),
            Param::constant(0.0)
                .set(0.0, 0.0)
                .linear(0.005, level)
                .exp(0.06, level * 0.25)
                .exp(STAB_LENGTH, SILENT),
            0.0,
            STAB_LENGTH + 0.05,
        ));
        event.push(Voice::osc(
            Waveform::Sine,
            Param::constant(freq * 2.0),
            Param::constant(0.0)
                .set(0.0, 0.0)
                .linear(0.003, level * 0.22)
                .exp(STAB_LENGTH * 0.5, SILENT),
            0.0,
            STAB_LENGTH * 0.5 + 0.05,
        ));
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_sum(ev: &SoundEvent, at: f32) -> f32 {
        ev.voices.iter().map(|v| v.gain.value_at(at)).sum()
    }

    #[test]
    fn pad_uses_four_oscillators_per_note() {
        let ev = warble_pad(0.0, &[0, 3, 7, 10], 0.36);
        assert_eq!(ev.voices.len(), 16);
        assert!((ev.lifetime - 2.1).abs() < 1e-6);
    }

    #[test]
    fn larger_chords_are_normalised() {
        let three = chord_stab(0.0, &[0, 3, 7], 0.5);
        let five = chord_stab(0.0, &[0, 3, 7, 10, 12], 0.5);
        let a = peak_sum(&three, 0.005);
        let b = peak_sum(&five, 0.005);
        assert!((a - b).abs() / a < 0.25, "{} vs {}", a, b);
    }

    #[test]
    fn two_note_stab_is_not_boosted() {
        let two = chord_stab(0.0, &[0, 7], 0.5);
        let three = chord_stab(0.0, &[0, 3, 7], 0.5);
        assert!(peak_sum(&two, 0.005) < peak_sum(&three, 0.005));
    }
}
