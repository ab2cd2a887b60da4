use super::{BassStep, STEPS_PER_LOOP};
use crate::style::STYLE_COUNT;

const __: Option<BassStep> = None;

const fn b(pitch: i8, velocity: f32, duration: f32) -> Option<BassStep> {
    Some(BassStep {
        pitch,
        velocity,
        duration,
    })
}

/// Sub-bass lines, one 32-step row per style. Pitches are semitones above
/// the bass root; durations are seconds.
pub(super) static BASS: [[Option<BassStep>; STEPS_PER_LOOP]; STYLE_COUNT] = [
    // 0: Fourside Funk
    [
        b(0, 0.58, 0.2), __, b(0, 0.2, 0.08), __, b(12, 0.52, 0.16), __, b(7, 0.44, 0.14), __,
        b(0, 0.54, 0.2), __, b(10, 0.2, 0.08), __, b(10, 0.48, 0.16), b(9, 0.22, 0.1), b(7, 0.36, 0.14), b(0, 0.16, 0.06),
        b(0, 0.56, 0.2), __, b(0, 0.22, 0.08), __, b(12, 0.5, 0.16), b(12, 0.18, 0.06), b(7, 0.42, 0.14), __,
        b(0, 0.52, 0.2), __, b(9, 0.22, 0.08), __, b(7, 0.46, 0.16), __, b(12, 0.38, 0.14), b(0, 0.18, 0.06),
    ],
    // 1: Hyrule March
    [
        b(0, 0.56, 0.38), __, __, __, b(0, 0.22, 0.12), __, b(7, 0.5, 0.26), __,
        b(5, 0.52, 0.3), __, __, __, b(7, 0.48, 0.26), __, b(7, 0.2, 0.1), __,
        b(0, 0.54, 0.38), __, __, __, b(0, 0.2, 0.1), __, b(7, 0.48, 0.26), __,
        b(3, 0.5, 0.3), __, __, __, b(7, 0.46, 0.26), __, b(10, 0.18, 0.1), __,
    ],
    // 2: Snake Slither
    [
        b(0, 0.58, 0.2), __, b(0, 0.22, 0.08), __, b(10, 0.5, 0.18), __, b(11, 0.2, 0.08), __,
        b(0, 0.54, 0.2), __, __, b(7, 0.2, 0.08), b(5, 0.48, 0.18), __, b(4, 0.22, 0.1), b(5, 0.16, 0.06),
        b(0, 0.56, 0.2), __, b(0, 0.2, 0.08), __, b(7, 0.52, 0.18), __, b(8, 0.22, 0.08), __,
        b(0, 0.5, 0.2), __, __, b(3, 0.18, 0.08), b(7, 0.46, 0.18), b(8, 0.18, 0.08), b(7, 0.36, 0.16), __,
    ],
    // 3: Guardia Festival
    [
        b(0, 0.52, 0.2), __, b(3, 0.34, 0.14), __, b(7, 0.48, 0.18), __, b(10, 0.3, 0.12), __,
        b(12, 0.5, 0.18), __, b(10, 0.22, 0.1), __, b(7, 0.46, 0.18), __, b(5, 0.24, 0.12), b(3, 0.16, 0.08),
        b(0, 0.5, 0.2), __, b(3, 0.32, 0.14), __, b(7, 0.46, 0.18), __, b(10, 0.28, 0.12), __,
        b(12, 0.48, 0.18), __, b(9, 0.2, 0.1), __, b(7, 0.44, 0.18), b(5, 0.2, 0.1), b(3, 0.34, 0.14), __,
    ],
    // 4: Gemini Mirror
    [
        b(0, 0.54, 0.22), __, __, __, b(3, 0.46, 0.2), __, b(5, 0.38, 0.18), __,
        b(7, 0.5, 0.22), __, b(10, 0.28, 0.12), __, b(12, 0.48, 0.2), __, b(10, 0.22, 0.1), b(7, 0.18, 0.08),
        b(0, 0.52, 0.22), __, __, __, b(12, 0.44, 0.2), __, b(10, 0.36, 0.18), __,
        b(7, 0.48, 0.22), __, b(5, 0.26, 0.12), __, b(3, 0.44, 0.2), b(5, 0.2, 0.1), b(7, 0.4, 0.18), __,
    ],
    // 5: Bright Flash
    [
        b(0, 0.52, 0.2), __, b(3, 0.32, 0.14), __, b(7, 0.48, 0.18), __, b(10, 0.28, 0.12), __,
        b(12, 0.5, 0.18), __, b(10, 0.22, 0.1), __, b(7, 0.46, 0.18), __, b(3, 0.26, 0.12), b(0, 0.16, 0.06),
        b(0, 0.5, 0.2), __, b(3, 0.3, 0.14), __, b(7, 0.46, 0.18), __, b(12, 0.48, 0.2), __,
        b(15, 0.46, 0.18), __, b(12, 0.22, 0.1), b(10, 0.18, 0.08), b(7, 0.42, 0.18), __, b(5, 0.24, 0.12), b(7, 0.16, 0.06),
    ],
    // 6: Pharaoh Rush
    [
        b(0, 0.6, 0.18), __, __, __, b(1, 0.44, 0.14), __, b(4, 0.5, 0.16), __,
        b(5, 0.56, 0.18), __, __, __, b(7, 0.52, 0.16), __, b(8, 0.28, 0.1), b(7, 0.18, 0.06),
        b(0, 0.58, 0.18), __, __, b(1, 0.18, 0.08), b(4, 0.52, 0.16), __, b(5, 0.56, 0.18), __,
        b(7, 0.54, 0.16), __, b(8, 0.24, 0.1), __, b(5, 0.5, 0.16), b(4, 0.22, 0.1), b(1, 0.44, 0.14), b(0, 0.16, 0.06),
    ],
    // 7: Sky World
    [
        b(0, 0.58, 0.14), b(0, 0.26, 0.08), __, __, b(0, 0.54, 0.14), __, b(7, 0.48, 0.14), __,
        b(5, 0.52, 0.14), b(5, 0.22, 0.08), __, __, b(7, 0.5, 0.14), __, b(10, 0.26, 0.1), __,
        b(0, 0.56, 0.14), b(0, 0.24, 0.08), __, __, b(0, 0.52, 0.14), __, b(3, 0.3, 0.1), __,
        b(7, 0.5, 0.14), __, b(10, 0.22, 0.1), __, b(12, 0.46, 0.14), b(10, 0.2, 0.08), b(7, 0.36, 0.14), __,
    ],
    // 8: Wily's Resolve
    [
        b(0, 0.64, 0.18), __, __, b(0, 0.24, 0.08), b(12, 0.56, 0.16), __, b(7, 0.44, 0.14), __,
        b(0, 0.6, 0.18), __, __, b(0, 0.22, 0.08), b(7, 0.52, 0.16), __, b(10, 0.3, 0.12), b(0, 0.18, 0.08),
        b(0, 0.62, 0.18), __, __, b(0, 0.24, 0.08), b(12, 0.54, 0.16), __, b(7, 0.42, 0.14), __,
        b(0, 0.58, 0.18), __, __, b(3, 0.2, 0.08), b(7, 0.5, 0.16), b(10, 0.24, 0.1), b(12, 0.46, 0.16), __,
    ],
    // 9: Hard Corps
    [
        b(0, 0.62, 0.18), b(0, 0.3, 0.1), __, __, b(0, 0.58, 0.18), __, b(7, 0.5, 0.16), __,
        b(0, 0.6, 0.18), b(0, 0.28, 0.1), __, __, b(5, 0.56, 0.16), __, b(7, 0.44, 0.14), b(0, 0.2, 0.08),
        b(0, 0.6, 0.18), b(0, 0.28, 0.1), __, __, b(0, 0.56, 0.18), __, b(10, 0.48, 0.16), __,
        b(7, 0.58, 0.18), b(7, 0.26, 0.1), __, __, b(5, 0.54, 0.16), b(4, 0.2, 0.1), b(7, 0.42, 0.14), __,
    ],
];
