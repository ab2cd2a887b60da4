use super::{PadStep, PadVoicing, STEPS_PER_LOOP};
use crate::style::STYLE_COUNT;

const __: Option<PadStep> = None;

const fn pad(pitches: &'static [i8], velocity: f32) -> Option<PadStep> {
    Some(PadStep {
        pitches,
        velocity,
        voicing: PadVoicing::Sustain,
    })
}

const fn stab(pitches: &'static [i8], velocity: f32) -> Option<PadStep> {
    Some(PadStep {
        pitches,
        velocity,
        voicing: PadVoicing::Stab,
    })
}

pub(super) static PAD: [[Option<PadStep>; STEPS_PER_LOOP]; STYLE_COUNT] = [
    // 0: Fourside Funk
    [
        pad(&[0, 3, 7, 10], 0.36), __, __, __, __, __, __, __,
        __, __, __, __, stab(&[10, 14, 17], 0.24), __, __, __,
        pad(&[0, 3, 7, 10], 0.34), __, __, __, __, __, __, __,
        pad(&[9, 12, 16, 19], 0.26), __, __, __, __, __, __, __,
    ],
    // 1: Hyrule March
    [
        stab(&[0, 7, 12], 0.52), __, __, __, __, __, stab(&[7, 14, 19], 0.4), __,
        stab(&[5, 12, 17], 0.48), __, __, __, __, __, stab(&[7, 14], 0.36), __,
        stab(&[0, 7, 12], 0.5), __, __, __, __, __, stab(&[7, 14, 19], 0.38), __,
        stab(&[3, 10, 15], 0.46), __, __, __, __, __, stab(&[7, 12, 19], 0.36), __,
    ],
    // 2: Snake Slither
    [
        stab(&[0, 7, 12], 0.44), __, __, __, __, __, __, __,
        stab(&[0, 7], 0.36), __, __, __, stab(&[5, 12], 0.28), __, __, __,
        stab(&[0, 7, 12], 0.42), __, __, __, __, stab(&[7, 14], 0.3), __, __,
        stab(&[0, 5, 7], 0.34), __, __, __, __, __, stab(&[3, 7, 10], 0.26), __,
    ],
    // 3: Guardia Festival
    [
        stab(&[0, 3, 7, 10], 0.4), __, __, __, __, __, stab(&[7, 10, 14], 0.3), __,
        stab(&[0, 3, 7], 0.36), __, __, __, stab(&[5, 10, 12], 0.26), __, __, __,
        stab(&[0, 3, 7, 10], 0.38), __, __, __, __, __, stab(&[7, 10, 14], 0.28), __,
        stab(&[0, 3, 7], 0.34), __, __, __, stab(&[9, 12, 16], 0.26), __, __, __,
    ],
    // 4: Gemini Mirror
    [
        stab(&[0, 3, 7], 0.38), __, __, __, __, __, stab(&[5, 10, 12], 0.3), __,
        stab(&[7, 10, 14], 0.36), __, __, __, __, stab(&[0, 3, 7, 12], 0.32), __, __,
        stab(&[0, 3, 7], 0.36), __, __, __, __, __, stab(&[10, 14, 17], 0.28), __,
        stab(&[7, 12], 0.34), __, __, __, stab(&[3, 7, 10], 0.3), __, stab(&[0, 7], 0.34), __,
    ],
    // 5: Bright Flash
    [
        stab(&[0, 7, 12], 0.42), __, __, __, __, __, stab(&[3, 7, 10], 0.32), __,
        stab(&[0, 7, 12], 0.4), __, __, __, __, stab(&[5, 10, 12], 0.28), __, __,
        stab(&[0, 7, 12], 0.4), __, __, __, __, __, stab(&[7, 12, 15], 0.3), __,
        stab(&[3, 10, 15], 0.38), __, __, __, __, __, stab(&[0, 7, 12], 0.36), __,
    ],
    // 6: Pharaoh Rush
    [
        stab(&[0, 7], 0.46), __, __, __, __, __, stab(&[4, 8], 0.34), __,
        stab(&[5, 8, 12], 0.4), __, __, __, __, stab(&[7, 10], 0.3), __, __,
        stab(&[0, 7], 0.44), __, __, __, stab(&[1, 8], 0.32), __, __, __,
        stab(&[5, 8, 12], 0.38), __, __, __, __, __, stab(&[0, 5, 8], 0.34), __,
    ],
    // 7: Sky World
    [
        stab(&[0, 7, 12], 0.44), __, __, __, __, __, __, __,
        stab(&[5, 12], 0.36), __, __, __, stab(&[7, 14], 0.3), __, __, __,
        stab(&[0, 7, 12], 0.42), __, __, __, __, __, stab(&[3, 10], 0.28), __,
        stab(&[7, 14], 0.32), __, __, __, stab(&[0, 7, 12], 0.26), __, __, __,
    ],
    // 8: Wily's Resolve
    [
        stab(&[0, 7, 12], 0.46), __, __, __, __, __, __, __,
        __, __, __, __, stab(&[7, 14], 0.32), __, __, __,
        stab(&[0, 7, 12], 0.44), __, __, __, __, __, __, __,
        pad(&[0, 3, 7, 10], 0.28), __, __, __, __, __, __, __,
    ],
    // 9: Hard Corps
    [
        stab(&[0, 7, 12], 0.5), __, __, __, __, __, stab(&[7, 14], 0.38), __,
        stab(&[0, 7, 12], 0.46), __, __, __, __, __, stab(&[5, 12], 0.34), __,
        stab(&[0, 7, 12], 0.48), __, __, __, __, __, stab(&[10, 17], 0.36), __,
        stab(&[7, 14], 0.44), __, __, __, __, __, stab(&[0, 5, 7, 12], 0.38), __,
    ],
];
