//! Pattern Bank: per-style 32-step tables for the backing track.
//!
//! The tables are authored data. Lookups never fail; an unknown style id
//! reads style 0's row.

mod bass;
mod pad;
mod perc;

use serde::Serialize;

use crate::style::STYLE_COUNT;

/// Two measures of 16th notes.
pub const STEPS_PER_LOOP: usize = 32;

/// One sub-bass note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BassStep {
    /// Semitones above the bass root.
    pub pitch: i8,
    pub velocity: f32,
    /// Seconds.
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PadVoicing {
    /// Long warble pad with a slow release.
    Sustain,
    /// Short percussive chord hit.
    Stab,
}

/// One chord event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PadStep {
    pub pitches: &'static [i8],
    pub velocity: f32,
    pub voicing: PadVoicing,
}

/// Percussion velocities. Zero is silent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercPattern {
    pub kick: [f32; STEPS_PER_LOOP],
    pub snare: [f32; STEPS_PER_LOOP],
    /// Signed: negative selects the open hi-hat.
    pub hihat: [f32; STEPS_PER_LOOP],
    pub texture: [f32; STEPS_PER_LOOP],
}

fn row(style: usize) -> usize {
    if style < STYLE_COUNT {
        style
    } else {
        0
    }
}

pub fn bass_pattern(style: usize) -> &'static [Option<BassStep>; STEPS_PER_LOOP] {
    &bass::BASS[row(style)]
}

pub fn pad_pattern(style: usize) -> &'static [Option<PadStep>; STEPS_PER_LOOP] {
    &pad::PAD[row(style)]
}

pub fn perc_pattern(style: usize) -> &'static PercPattern {
    &perc::PERC[row(style)]
}
