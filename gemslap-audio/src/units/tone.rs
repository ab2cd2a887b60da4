use gemslap_types::{quantize, semitone_freq, UnitKind};

use super::{ROOT_HZ, SILENT};
use crate::graph::{Bus, Filter, FilterKind, Param, SoundEvent, Voice, Waveform};

/// Lowest semitone a melodic tone may sound at; lower input is folded up by
/// octaves.
const LOWEST: i32 = -3;
/// Highest semitone after folding.
const HIGHEST: i32 = 72;
/// Duration used when the caller passes something unplayable.
const DEFAULT_DUR: f32 = 0.35;
const MAX_DUR: f32 = 8.0;
const DEFAULT_VOL: f32 = 0.16;

struct Partial {
    ratio: f32,
    waveform: Waveform,
    amp: f32,
    decay_mul: f32,
}

const PARTIALS: [Partial; 6] = [
    Partial { ratio: 1.0, waveform: Waveform::Triangle, amp: 0.42, decay_mul: 1.0 },
    Partial { ratio: 0.997, waveform: Waveform::Triangle, amp: 0.22, decay_mul: 0.95 },
    Partial { ratio: 1.004, waveform: Waveform::Triangle, amp: 0.22, decay_mul: 0.90 },
    Partial { ratio: 2.0, waveform: Waveform::Sine, amp: 0.16, decay_mul: 0.55 },
    Partial { ratio: 2.76, waveform: Waveform::Sine, amp: 0.05, decay_mul: 0.40 },
    Partial { ratio: 0.5, waveform: Waveform::Triangle, amp: 0.12, decay_mul: 0.75 },
];

/// Snap `pitch` to the scale and fold it into the playable range.
pub fn tone_semitone(pitch: i32) -> i32 {
    let note = i64::from(quantize(pitch));
    let lowest = i64::from(LOWEST);
    let folded = if note < lowest {
        // smallest whole number of octaves that lifts the note to the floor
        let octaves = (lowest - note + 11) / 12;
        note + octaves * 12
    } else {
        note
    };
    folded.min(i64::from(HIGHEST)) as i32
}

/// Six-partial additive tone with a slight pitch bend into the note, a
/// fifth-above "bloom" that swells in after the attack, and a low-pass that
/// sweeps down over the note.
pub fn tone(t: f64, pitch: i32, dur: f32, vol: f32) -> SoundEvent {
    let dur = if dur.is_finite() && dur > 0.0 {
        dur.clamp(0.01, MAX_DUR)
    } else {
        DEFAULT_DUR
    };
    let vol = if vol.is_finite() { vol.clamp(0.0, 1.0) } else { DEFAULT_VOL };
    let freq = semitone_freq(ROOT_HZ, tone_semitone(pitch) as f32);

    let sweep = Param::constant(5500.0 + vol * 3000.0)
        .exp(dur * 0.4, (freq * 4.0).max(1200.0))
        .exp(dur, (freq * 3.0).max(700.0));
    let mut event = SoundEvent::new(UnitKind::Tone, Bus::Sfx, t)
        .with_filter(Filter::automated(FilterKind::LowPass, sweep, 1.2))
        .lasting(dur + 0.15);

    for p in &PARTIALS {
        let target = freq * p.ratio;
        let peak = vol * p.amp;
        event.push(Voice::osc(
            p.waveform,
            Param::constant(target * 1.009).exp(0.03, target),
            Param::constant(0.0)
                .set(0.0, 0.0)
                .linear(0.003, peak)
                .exp(0.07, peak * 0.45)
                .exp(dur * p.decay_mul, SILENT),
            0.0,
            dur * p.decay_mul + 0.1,
        ));
    }

    let bloom_peak = vol * 0.08;
    event.push(Voice::osc(
        Waveform::Sine,
        Param::constant(freq * 1.5),
        Param::constant(0.0)
            .set(0.0, 0.0)
            .set(0.04, 0.0)
            .linear(0.12, bloom_peak)
            .set(0.25, bloom_peak)
            .exp(dur * 0.7, SILENT),
        0.0,
        dur * 0.7 + 0.1,
    ));
    event
}
