//! Synthesis Unit Library.
//!
//! Each unit is a pure function of a start time (audio-clock seconds) and
//! its parameters, returning a [`SoundEvent`](crate::graph::SoundEvent) with
//! its lifetime already computed. Gating (context state, unit budget, music
//! toggle) and cleanup live in the engine, not here.

pub mod bass;
pub mod chords;
pub mod drums;
pub mod sfx;
pub mod tone;

pub use bass::sub_bass;
pub use chords::{chord_stab, warble_pad};
pub use drums::{count_click, hihat, kick, tape_snap, texture_grain};
pub use sfx::{crystal_shatter, failure_thud, level_clear_fanfare, shockwave};
pub use tone::tone;

/// Middle C; reference for melodic tones and game effects.
pub const ROOT_HZ: f32 = 261.63;
/// C2; reference for the sub-bass and shockwave body.
pub const BASS_ROOT_HZ: f32 = 65.41;
/// C3; reference for pads and stabs.
pub const CHORD_ROOT_HZ: f32 = 130.81;

/// Envelope floor used as the target of exponential decays.
pub(crate) const SILENT: f32 = 0.001;

/// Small LCG used for detune jitter and noise seeds.
#[derive(Debug, Clone)]
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed)
    }

    /// Uniform in [0, 1].
    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 32) as f32) / (u32::MAX as f32)
    }

    /// Fresh seed for a noise buffer.
    pub fn next_seed(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }
}

impl Default for Rng {
    fn default() -> Self {
        Rng(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_stays_in_unit_range() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let x = rng.next_f32();
            assert!((0.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn rng_is_reproducible() {
        let mut a = Rng::new(99);
        let mut b = Rng::new(99);
        for _ in 0..10 {
            assert_eq!(a.next_seed(), b.next_seed());
        }
    }
}
