//! # gemslap-types
//!
//! Shared definitions for the Gem Slap audio core: the pentatonic harmony
//! quantizer, style metadata, the per-style pattern bank and the messages the
//! audio thread reports back to game and render code.

mod audio;
pub mod harmony;
pub mod pattern;
pub mod style;

pub use audio::{AudioFeedback, BeatAnchor, ContextState, UnitKind};
pub use harmony::{quantize, semitone_freq, PENTATONIC, PENTATONIC_LADDER};
pub use pattern::{
    bass_pattern, pad_pattern, perc_pattern, BassStep, PadStep, PadVoicing, PercPattern,
    STEPS_PER_LOOP,
};
pub use style::{Style, STYLE_COUNT};
