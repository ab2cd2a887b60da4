use serde::{Deserialize, Serialize};

/// Number of built-in backing-track styles.
pub const STYLE_COUNT: usize = 10;

const NAMES: [&str; STYLE_COUNT] = [
    "Fourside Funk",
    "Hyrule March",
    "Snake Slither",
    "Guardia Festival",
    "Gemini Mirror",
    "Bright Flash",
    "Pharaoh Rush",
    "Sky World",
    "Wily's Resolve",
    "Hard Corps",
];

/// Default tempo per style, sorted low to high.
const TEMPOS: [f32; STYLE_COUNT] = [
    108.0, 112.0, 126.0, 130.0, 132.0, 138.0, 144.0, 148.0, 150.0, 150.0,
];

/// Fraction of a step by which odd (off-beat) 16ths are delayed.
const SWING: [f64; STYLE_COUNT] = [0.12, 0.0, 0.10, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

/// Tempo used when a style id has no table entry.
pub const FALLBACK_TEMPO: f32 = 130.0;

/// A backing-track style id (0..STYLE_COUNT).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Style(u8);

impl From<u8> for Style {
    fn from(id: u8) -> Self {
        Style::from_id(id as usize)
    }
}

impl From<Style> for u8 {
    fn from(style: Style) -> Self {
        style.0
    }
}

impl Style {
    pub const ALL: [Style; STYLE_COUNT] = [
        Style(0),
        Style(1),
        Style(2),
        Style(3),
        Style(4),
        Style(5),
        Style(6),
        Style(7),
        Style(8),
        Style(9),
    ];

    /// Wrap any id into range, the way game code selects styles by level number.
    pub fn wrapping(id: u32) -> Self {
        Style((id % STYLE_COUNT as u32) as u8)
    }

    /// Exact lookup; ids outside the table resolve to style 0.
    pub fn from_id(id: usize) -> Self {
        if id < STYLE_COUNT {
            Style(id as u8)
        } else {
            Style(0)
        }
    }

    pub fn id(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        NAMES[self.id()]
    }

    pub fn tempo(self) -> f32 {
        TEMPOS.get(self.id()).copied().unwrap_or(FALLBACK_TEMPO)
    }

    pub fn swing(self) -> f64 {
        SWING[self.id()]
    }

    /// Delay applied to `step` given a step length in seconds.
    /// Only odd steps of swung styles move; even steps always sit on the grid.
    pub fn swing_offset(self, step: usize, step_duration: f64) -> f64 {
        let swing = self.swing();
        if swing > 0.0 && step % 2 == 1 {
            step_duration * swing
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02} {}", self.0, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_and_fallback() {
        assert_eq!(Style::wrapping(13).id(), 3);
        assert_eq!(Style::from_id(13).id(), 0);
        assert_eq!(Style::from_id(9).id(), 9);
    }

    #[test]
    fn only_two_styles_swing() {
        let swung: Vec<usize> = Style::ALL
            .iter()
            .filter(|s| s.swing() > 0.0)
            .map(|s| s.id())
            .collect();
        assert_eq!(swung, vec![0, 2]);
    }

    #[test]
    fn swing_moves_odd_steps_only() {
        let s = Style::from_id(0);
        assert_eq!(s.swing_offset(0, 0.125), 0.0);
        assert!((s.swing_offset(1, 0.125) - 0.015).abs() < 1e-12);
        assert_eq!(Style::from_id(1).swing_offset(1, 0.125), 0.0);
    }

    #[test]
    fn tempos_ascend() {
        let tempos: Vec<f32> = Style::ALL.iter().map(|s| s.tempo()).collect();
        assert!(tempos.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(Style::from_id(3).tempo(), 130.0);
    }

    #[test]
    fn serializes_as_bare_id() {
        let json = serde_json::to_string(&Style::from_id(7)).unwrap();
        assert_eq!(json, "7");
        let out_of_range: Style = serde_json::from_str("42").unwrap();
        assert_eq!(out_of_range, Style::from_id(0));
    }
}
