use super::PercPattern;
use crate::style::STYLE_COUNT;

/// Percussion velocities per style. A negative hi-hat value plays the open
/// variant at the absolute velocity.
pub(super) static PERC: [PercPattern; STYLE_COUNT] = [
    // 0: Fourside Funk
    PercPattern {
        kick: [
            0.72, 0.0, 0.0, 0.0, 0.0, 0.0, 0.32, 0.0, 0.62, 0.0, 0.2, 0.0, 0.0, 0.0, 0.26, 0.0,
            0.72, 0.0, 0.16, 0.0, 0.0, 0.0, 0.32, 0.0, 0.62, 0.0, 0.2, 0.0, 0.0, 0.0, 0.26, 0.14,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.54, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.0, 0.12,
            0.0, 0.0, 0.0, 0.0, 0.54, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.0, 0.16,
        ],
        hihat: [
            0.3, 0.14, 0.22, 0.14, 0.3, 0.14, -0.34, 0.14, 0.3, 0.14, 0.22, 0.14, 0.3, 0.14, -0.34, 0.14,
            0.3, 0.14, 0.22, 0.14, 0.3, 0.14, -0.34, 0.14, 0.3, 0.14, 0.22, 0.14, 0.3, 0.14, -0.34, 0.14,
        ],
        texture: [
            0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0,
            0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.0, 0.0,
        ],
    },
    // 1: Hyrule March
    PercPattern {
        kick: [
            0.72, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.58, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.56, 0.0, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.48, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.48, 0.0, 0.0, 0.0,
        ],
        hihat: [
            0.26, 0.0, 0.16, 0.0, 0.26, 0.0, 0.16, 0.0, 0.26, 0.0, 0.16, 0.0, 0.26, 0.0, -0.3, 0.0,
            0.26, 0.0, 0.16, 0.0, 0.26, 0.0, 0.16, 0.0, 0.26, 0.0, 0.16, 0.0, 0.26, 0.0, -0.28, 0.0,
        ],
        texture: [
            0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0,
            0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0,
        ],
    },
    // 2: Snake Slither
    PercPattern {
        kick: [
            0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.58, 0.0, 0.2, 0.0, 0.0, 0.0, 0.28, 0.0,
            0.7, 0.0, 0.16, 0.0, 0.0, 0.0, 0.3, 0.0, 0.58, 0.0, 0.2, 0.0, 0.0, 0.0, 0.28, 0.14,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.12,
            0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.12, 0.14, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.16,
        ],
        hihat: [
            0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12, 0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12,
            0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12, 0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12,
        ],
        texture: [
            0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.0,
            0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.04, 0.04,
        ],
    },
    // 3: Guardia Festival
    PercPattern {
        kick: [
            0.64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.28, 0.0, 0.52, 0.0, 0.18, 0.0, 0.0, 0.0, 0.22, 0.0,
            0.64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.28, 0.0, 0.52, 0.0, 0.18, 0.0, 0.0, 0.0, 0.22, 0.12,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.12, 0.0, 0.0, 0.0, 0.0, 0.48, 0.0, 0.0, 0.1,
            0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.12, 0.0, 0.0, 0.0, 0.0, 0.48, 0.0, 0.0, 0.14,
        ],
        hihat: [
            0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12, 0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12,
            0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12, 0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12,
        ],
        texture: [
            0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04,
            0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04,
        ],
    },
    // 4: Gemini Mirror
    PercPattern {
        kick: [
            0.68, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.56, 0.0, 0.0, 0.0, 0.22, 0.0, 0.0, 0.0,
            0.68, 0.0, 0.18, 0.0, 0.0, 0.0, 0.3, 0.0, 0.56, 0.0, 0.0, 0.0, 0.22, 0.0, 0.16, 0.0,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.54, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.0, 0.12,
            0.0, 0.0, 0.0, 0.0, 0.54, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.12, 0.52, 0.0, 0.0, 0.0,
        ],
        hihat: [
            0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12, 0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12,
            0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12, 0.28, 0.12, 0.2, 0.12, 0.28, 0.12, -0.32, 0.12,
        ],
        texture: [
            0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0,
        ],
    },
    // 5: Bright Flash
    PercPattern {
        kick: [
            0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.32, 0.0, 0.58, 0.0, 0.2, 0.0, 0.0, 0.0, 0.26, 0.0,
            0.7, 0.0, 0.16, 0.0, 0.0, 0.0, 0.32, 0.0, 0.58, 0.0, 0.2, 0.0, 0.0, 0.0, 0.26, 0.14,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.12,
            0.0, 0.0, 0.0, 0.0, 0.52, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.16,
        ],
        hihat: [
            0.28, 0.0, 0.2, 0.0, 0.28, 0.0, -0.32, 0.0, 0.28, 0.0, 0.2, 0.0, 0.28, 0.0, -0.3, 0.0,
            0.28, 0.0, 0.2, 0.0, 0.28, 0.0, -0.32, 0.0, 0.28, 0.0, 0.2, 0.0, 0.28, 0.0, -0.3, 0.0,
        ],
        texture: [
            0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04,
            0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04,
        ],
    },
    // 6: Pharaoh Rush
    PercPattern {
        kick: [
            0.76, 0.0, 0.0, 0.0, 0.36, 0.0, 0.0, 0.0, 0.64, 0.0, 0.2, 0.0, 0.24, 0.0, 0.0, 0.0,
            0.74, 0.0, 0.0, 0.0, 0.36, 0.0, 0.18, 0.0, 0.62, 0.0, 0.2, 0.0, 0.24, 0.0, 0.16, 0.0,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.58, 0.0, 0.0, 0.16, 0.0, 0.0, 0.0, 0.0, 0.56, 0.0, 0.14, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.58, 0.0, 0.16, 0.0, 0.0, 0.0, 0.0, 0.0, 0.56, 0.0, 0.14, 0.18,
        ],
        hihat: [
            0.34, 0.18, 0.26, 0.18, 0.34, 0.18, -0.38, 0.18, 0.34, 0.18, 0.26, 0.18, 0.34, 0.18, -0.38, 0.18,
            0.34, 0.18, 0.26, 0.18, 0.34, 0.18, -0.38, 0.18, 0.34, 0.18, 0.26, 0.18, 0.34, 0.18, -0.38, 0.18,
        ],
        texture: [
            0.0, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0,
            0.0, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.04, 0.0, 0.04, 0.0,
        ],
    },
    // 7: Sky World
    PercPattern {
        kick: [
            0.74, 0.0, 0.0, 0.0, 0.32, 0.0, 0.0, 0.0, 0.62, 0.0, 0.2, 0.0, 0.24, 0.0, 0.0, 0.0,
            0.74, 0.0, 0.0, 0.0, 0.32, 0.0, 0.18, 0.0, 0.62, 0.0, 0.2, 0.0, 0.24, 0.0, 0.0, 0.0,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.56, 0.0, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.54, 0.0, 0.12, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.56, 0.0, 0.14, 0.0, 0.0, 0.0, 0.0, 0.0, 0.54, 0.0, 0.12, 0.16,
        ],
        hihat: [
            0.32, 0.16, 0.24, 0.16, 0.32, 0.16, -0.36, 0.16, 0.32, 0.16, 0.24, 0.16, 0.32, 0.16, -0.36, 0.16,
            0.32, 0.16, 0.24, 0.16, 0.32, 0.16, -0.36, 0.16, 0.32, 0.16, 0.24, 0.16, 0.32, 0.16, -0.36, 0.16,
        ],
        texture: [
            0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0,
            0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04, 0.0,
        ],
    },
    // 8: Wily's Resolve
    PercPattern {
        kick: [
            0.78, 0.0, 0.0, 0.0, 0.38, 0.0, 0.0, 0.0, 0.66, 0.0, 0.22, 0.0, 0.28, 0.0, 0.0, 0.0,
            0.76, 0.0, 0.0, 0.0, 0.36, 0.0, 0.18, 0.0, 0.64, 0.0, 0.22, 0.0, 0.28, 0.0, 0.0, 0.0,
        ],
        snare: [
            0.0, 0.0, 0.0, 0.0, 0.62, 0.0, 0.0, 0.16, 0.0, 0.0, 0.0, 0.0, 0.6, 0.0, 0.0, 0.18,
            0.0, 0.0, 0.0, 0.0, 0.62, 0.0, 0.0, 0.16, 0.0, 0.0, 0.0, 0.0, 0.6, 0.0, 0.14, 0.2,
        ],
        hihat: [
            0.36, 0.2, 0.28, 0.2, 0.36, 0.2, -0.4, 0.2, 0.36, 0.2, 0.28, 0.2, 0.36, 0.2, -0.4, 0.2,
            0.36, 0.2, 0.28, 0.2, 0.36, 0.2, -0.4, 0.2, 0.36, 0.2, 0.28, 0.2, 0.36, 0.2, -0.4, 0.2,
        ],
        texture: [
            0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03,
            0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03,
        ],
    },
    // 9: Hard Corps
    PercPattern {
        kick: [
            0.78, 0.0, 0.0, 0.0, 0.36, 0.0, 0.0, 0.0, 0.64, 0.0, 0.24, 0.0, 0.28, 0.0, 0.0, 0.0,
            0.76, 0.0, 0.2, 0.0, 0.36, 0.0, 0.0, 0.0, 0.64, 0.0, 0.24, 0.0, 0.28, 0.0, 0.0, 0.0,
        ],
        snare: [
            0.0, 0.0, 0.26, 0.0, 0.58, 0.0, 0.24, 0.0, 0.0, 0.0, 0.26, 0.0, 0.56, 0.0, 0.22, 0.0,
            0.0, 0.0, 0.28, 0.0, 0.58, 0.0, 0.24, 0.0, 0.0, 0.0, 0.26, 0.0, 0.56, 0.0, 0.22, 0.18,
        ],
        hihat: [
            0.34, 0.18, 0.26, 0.18, 0.34, 0.18, 0.26, 0.18, 0.34, 0.18, 0.26, 0.18, 0.34, 0.18, 0.26, 0.18,
            0.34, 0.18, 0.26, 0.18, 0.34, 0.18, 0.26, 0.18, 0.34, 0.18, 0.26, 0.18, 0.34, 0.18, -0.36, 0.18,
        ],
        texture: [
            0.04, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.0,
            0.04, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.04, 0.0, 0.0, 0.0, 0.04,
        ],
    },
];
