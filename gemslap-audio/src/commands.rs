use crate::lifecycle::HostEvent;

/// Commands sent from the game thread to the audio thread.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    // Context
    Init,
    Unlock,
    Gesture,
    HostEvent(HostEvent),
    /// Suspend the output, as the OS does on backgrounding.
    Suspend,

    // Beat
    SetStyle(u32),
    SetMusicEnabled(bool),
    StartBeat { tempo: f32 },
    StopBeat,

    // One-shots
    PlayTone { pitch: i32, duration: f32, volume: f32 },
    PlayShockwave { strength: f32 },
    PlayCrystalShatter { index: u32, total: u32 },
    PlayLevelClearFanfare,
    PlaySuccessJingle,
    PlayFailureJingle,
    PlayCountClick { accent: bool },

    Shutdown,
}

impl AudioCmd {
    /// Context lifecycle, gestures and one-shot feedback sounds share the
    /// priority channel. They stay in send order relative to each other and
    /// are never queued behind beat changes.
    pub fn is_priority(&self) -> bool {
        matches!(
            self,
            AudioCmd::Init
                | AudioCmd::Unlock
                | AudioCmd::Gesture
                | AudioCmd::HostEvent(_)
                | AudioCmd::Suspend
                | AudioCmd::PlayTone { .. }
                | AudioCmd::PlayShockwave { .. }
                | AudioCmd::PlayCrystalShatter { .. }
                | AudioCmd::PlayLevelClearFanfare
                | AudioCmd::PlaySuccessJingle
                | AudioCmd::PlayFailureJingle
                | AudioCmd::PlayCountClick { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_sounds_are_priority() {
        assert!(AudioCmd::PlayCrystalShatter { index: 0, total: 1 }.is_priority());
        assert!(AudioCmd::Gesture.is_priority());
        assert!(!AudioCmd::StartBeat { tempo: 130.0 }.is_priority());
        assert!(!AudioCmd::SetStyle(3).is_priority());
        assert!(!AudioCmd::Shutdown.is_priority());
    }

    #[test]
    fn lifecycle_shares_the_channel_with_gestures() {
        assert!(AudioCmd::Init.is_priority());
        assert!(AudioCmd::HostEvent(HostEvent::Hidden).is_priority());
        assert!(AudioCmd::HostEvent(HostEvent::Visible).is_priority());
        assert!(AudioCmd::Suspend.is_priority());
    }
}
