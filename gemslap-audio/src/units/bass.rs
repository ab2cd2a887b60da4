use gemslap_types::{semitone_freq, UnitKind};

use super::{BASS_ROOT_HZ, SILENT};
use crate::graph::{Bus, Param, SoundEvent, Voice, Waveform};

/// Release tail added after the note's nominal duration.
const RELEASE: f32 = 0.25;

/// Three-partial sub-bass (fundamental, octave, third harmonic) under a
/// shared attack/hold/release envelope. The bass bus supplies the low-pass.
pub fn sub_bass(t: f64, semitone: i8, velocity: f32, duration: f32) -> SoundEvent {
    let freq = semitone_freq(BASS_ROOT_HZ, f32::from(semitone));
    let duration = duration.max(0.0);
    let total = duration + RELEASE;
    let peak = velocity * 0.40;

    let envelope = |level: f32| {
        Param::constant(0.0)
            .set(0.0, 0.0)
            .linear(0.04, peak * level)
            .set(duration * 0.55, peak * level)
            .exp(total, SILENT * level)
    };

    let partials = [
        (Waveform::Triangle, 1.0, 0.45),
        (Waveform::Sine, 2.0, 0.30),
        (Waveform::Sine, 3.0, 0.12),
    ];

    let mut event = SoundEvent::new(UnitKind::SubBass, Bus::Bass, t).lasting(total);
    for (waveform, ratio, level) in partials {
        event.push(Voice::osc(
            waveform,
            Param::constant(freq * ratio),
            envelope(level),
            0.0,
            total,
        ));
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_partials_share_one_envelope_shape() {
        let ev = sub_bass(1.0, 12, 0.5, 0.2);
        assert_eq!(ev.voices.len(), 3);
        assert_eq!(ev.bus, Bus::Bass);
        assert!((ev.lifetime - 0.45).abs() < 1e-6);
        let fundamental = &ev.voices[0];
        assert!((fundamental.gain.value_at(0.04) - 0.5 * 0.4 * 0.45).abs() < 1e-6);
        match &fundamental.source {
            crate::graph::Source::Oscillator { frequency, .. } => {
                assert!((frequency.initial - 130.82).abs() < 0.01);
            }
            other => panic!("unexpected source {:?}", other),
        }
    }
}
