use serde::{Deserialize, Serialize};

use crate::style::Style;

/// State of the platform audio context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextState {
    /// Created but not yet unlocked by a gesture, or explicitly suspended.
    #[default]
    Suspended,
    Running,
    /// Suspended by the OS (phone call, lock screen, device loss).
    Interrupted,
    Closed,
}

impl ContextState {
    pub fn is_running(self) -> bool {
        self == ContextState::Running
    }

    /// Whether a gesture-driven resume can bring the context back.
    pub fn is_resumable(self) -> bool {
        matches!(self, ContextState::Suspended | ContextState::Interrupted)
    }
}

/// Shared time origin for game timing and the brightness pulse.
///
/// Captured in wall-clock milliseconds when the beat starts; the measure is
/// four beats at the session tempo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatAnchor {
    pub beat_start_ms: f64,
    pub measure_ms: f64,
}

impl BeatAnchor {
    pub fn from_tempo(beat_start_ms: f64, tempo: f32) -> Self {
        Self {
            beat_start_ms,
            measure_ms: 4.0 * 60_000.0 / f64::from(tempo.max(1.0)),
        }
    }

    pub fn beat_ms(&self) -> f64 {
        self.measure_ms / 4.0
    }
}

/// Every kind of sound the synthesis library can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    SubBass,
    Kick,
    TapeSnap,
    HiHat { open: bool },
    TextureGrain,
    WarblePad,
    ChordStab,
    Tone,
    Shockwave,
    CountClick,
    FailureThud,
    CrystalShatter,
    LevelClearFanfare,
}

impl UnitKind {
    /// Exempt units always play and never touch the unit budget.
    pub fn is_exempt(self) -> bool {
        matches!(self, UnitKind::CrystalShatter | UnitKind::LevelClearFanfare)
    }

    pub fn name(self) -> &'static str {
        match self {
            UnitKind::SubBass => "sub-bass",
            UnitKind::Kick => "kick",
            UnitKind::TapeSnap => "tape-snap",
            UnitKind::HiHat { open: false } => "hihat",
            UnitKind::HiHat { open: true } => "open-hihat",
            UnitKind::TextureGrain => "texture",
            UnitKind::WarblePad => "warble-pad",
            UnitKind::ChordStab => "chord-stab",
            UnitKind::Tone => "tone",
            UnitKind::Shockwave => "shockwave",
            UnitKind::CountClick => "count-click",
            UnitKind::FailureThud => "failure-thud",
            UnitKind::CrystalShatter => "crystal-shatter",
            UnitKind::LevelClearFanfare => "fanfare",
        }
    }
}

/// Messages sent from the audio thread back to game and render code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AudioFeedback {
    StepFired {
        step: usize,
        loop_count: u64,
        style: Style,
        /// Audio-clock seconds at which the step sounds.
        time: f64,
    },
    BeatStarted(BeatAnchor),
    BeatStopped,
    UnitDropped(UnitKind),
    ContextState(ContextState),
    Telemetry {
        avg_lateness_ms: f32,
        max_lateness_ms: f32,
        p95_lateness_ms: f32,
        late_ticks: u32,
        dropped_units: u64,
        active_units: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_measure_from_tempo() {
        let anchor = BeatAnchor::from_tempo(0.0, 120.0);
        assert!((anchor.measure_ms - 2000.0).abs() < 1e-9);
        assert!((anchor.beat_ms() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn only_feedback_critical_units_are_exempt() {
        assert!(UnitKind::CrystalShatter.is_exempt());
        assert!(UnitKind::LevelClearFanfare.is_exempt());
        assert!(!UnitKind::Shockwave.is_exempt());
        assert!(!UnitKind::HiHat { open: true }.is_exempt());
    }

    #[test]
    fn resumable_states() {
        assert!(ContextState::Suspended.is_resumable());
        assert!(ContextState::Interrupted.is_resumable());
        assert!(!ContextState::Running.is_resumable());
        assert!(!ContextState::Closed.is_resumable());
    }
}
