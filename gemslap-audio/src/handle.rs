//! Game-side front end: owns the audio thread and mirrors what the renderer
//! needs to read every frame.

use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use gemslap_types::{AudioFeedback, BeatAnchor, ContextState, Style};

use crate::audio_thread::{AudioThread, Inbox};
use crate::brightness::{brightness, Brightness};
use crate::clock::HostClock;
use crate::commands::AudioCmd;
use crate::engine::{AudioBackend, AudioEngine, EngineConfig};
use crate::lifecycle::HostEvent;

/// Last known audio-side state, updated from feedback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioReadState {
    pub step: usize,
    pub loop_count: u64,
    pub style: Style,
    pub anchor: Option<BeatAnchor>,
    pub context: ContextState,
    pub playing: bool,
    /// Audio-clock time of the last fired step.
    pub step_time: f64,
    pub dropped_units: u64,
    pub active_units: usize,
}

pub struct AudioHandle {
    priority_tx: Sender<AudioCmd>,
    normal_tx: Sender<AudioCmd>,
    feedback_rx: Receiver<AudioFeedback>,
    join_handle: Option<JoinHandle<()>>,
    clock: Box<dyn HostClock>,
    state: AudioReadState,
}

impl AudioHandle {
    /// Spawn the audio thread around an engine built from `backend`. `clock`
    /// is shared with the engine so anchors and `now_ms` agree.
    pub fn spawn<C>(backend: Box<dyn AudioBackend>, clock: C, config: EngineConfig) -> Self
    where
        C: HostClock + Clone + 'static,
    {
        let (priority_tx, priority_rx) = crossbeam_channel::unbounded();
        let (normal_tx, normal_rx) = crossbeam_channel::unbounded();
        let (feedback_tx, feedback_rx) = mpsc::channel();

        let mut engine = AudioEngine::new(backend, Box::new(clock.clone()), config);
        engine.set_feedback(feedback_tx);

        let join_handle = std::thread::Builder::new()
            .name("gemslap-audio".to_string())
            .spawn(move || {
                AudioThread::new(engine, Inbox::new(priority_rx, normal_rx)).run();
            });
        let join_handle = match join_handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!(target: "audio", "failed to spawn audio thread: {}", e);
                None
            }
        };

        Self {
            priority_tx,
            normal_tx,
            feedback_rx,
            join_handle,
            clock: Box::new(clock),
            state: AudioReadState::default(),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        let tx = if cmd.is_priority() {
            &self.priority_tx
        } else {
            &self.normal_tx
        };
        if tx.send(cmd).is_err() {
            log::debug!(target: "audio", "audio thread is gone");
        }
    }

    pub fn init(&self) {
        self.send(AudioCmd::Init);
    }

    pub fn unlock(&self) {
        self.send(AudioCmd::Unlock);
    }

    /// Forward a genuine user interaction.
    pub fn gesture(&self) {
        self.send(AudioCmd::Gesture);
    }

    pub fn host_event(&self, event: HostEvent) {
        self.send(AudioCmd::HostEvent(event));
    }

    pub fn suspend(&self) {
        self.send(AudioCmd::Suspend);
    }

    pub fn set_style(&self, id: u32) {
        self.send(AudioCmd::SetStyle(id));
    }

    pub fn set_music_enabled(&self, on: bool) {
        self.send(AudioCmd::SetMusicEnabled(on));
    }

    /// The anchor arrives back as [`AudioFeedback::BeatStarted`].
    pub fn start_beat(&self, tempo: f32) {
        self.send(AudioCmd::StartBeat { tempo });
    }

    pub fn stop_beat(&self) {
        self.send(AudioCmd::StopBeat);
    }

    pub fn play_tone(&self, pitch: i32, duration: f32, volume: f32) {
        self.send(AudioCmd::PlayTone {
            pitch,
            duration,
            volume,
        });
    }

    pub fn play_shockwave(&self, strength: f32) {
        self.send(AudioCmd::PlayShockwave { strength });
    }

    pub fn play_crystal_shatter(&self, index: u32, total: u32) {
        self.send(AudioCmd::PlayCrystalShatter { index, total });
    }

    pub fn play_level_clear_fanfare(&self) {
        self.send(AudioCmd::PlayLevelClearFanfare);
    }

    pub fn play_success_jingle(&self) {
        self.send(AudioCmd::PlaySuccessJingle);
    }

    pub fn play_failure_jingle(&self) {
        self.send(AudioCmd::PlayFailureJingle);
    }

    pub fn play_count_click(&self, accent: bool) {
        self.send(AudioCmd::PlayCountClick { accent });
    }

    /// Drain pending feedback, fold it into the read state and return it.
    pub fn drain_feedback(&mut self) -> Vec<AudioFeedback> {
        let msgs: Vec<AudioFeedback> = self.feedback_rx.try_iter().collect();
        for msg in &msgs {
            self.apply_feedback(msg);
        }
        msgs
    }

    fn apply_feedback(&mut self, msg: &AudioFeedback) {
        match msg {
            AudioFeedback::StepFired {
                step,
                loop_count,
                style,
                time,
            } => {
                self.state.step = *step;
                self.state.loop_count = *loop_count;
                self.state.style = *style;
                self.state.step_time = *time;
            }
            AudioFeedback::BeatStarted(anchor) => {
                self.state.anchor = Some(*anchor);
                self.state.playing = true;
            }
            AudioFeedback::BeatStopped => self.state.playing = false,
            AudioFeedback::UnitDropped(_) => self.state.dropped_units += 1,
            AudioFeedback::ContextState(state) => self.state.context = *state,
            AudioFeedback::Telemetry {
                dropped_units,
                active_units,
                ..
            } => {
                self.state.dropped_units = *dropped_units;
                self.state.active_units = *active_units;
            }
        }
    }

    pub fn read_state(&self) -> &AudioReadState {
        &self.state
    }

    /// Host time on the engine's clock.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Beat-phase brightness for a target on `phrase_beat` at `now_ms`.
    pub fn brightness(&self, now_ms: f64, phrase_beat: u32) -> Brightness {
        brightness(self.state.anchor.as_ref(), now_ms, phrase_beat)
    }
}

impl Drop for AudioHandle {
    fn drop(&mut self) {
        let _ = self.normal_tx.send(AudioCmd::Shutdown);
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use gemslap_types::UnitKind;

    use super::*;
    use crate::clock::SystemClock;
    use crate::engine::backend::{SharedTestBackend, TestBackend};

    #[test]
    fn feedback_reaches_read_state() {
        let backend = Arc::new(TestBackend::running());
        let mut handle = AudioHandle::spawn(
            Box::new(SharedTestBackend(Arc::clone(&backend))),
            SystemClock::new(),
            EngineConfig::default(),
        );
        handle.init();
        handle.set_style(2);
        handle.start_beat(120.0);

        let deadline = Instant::now() + Duration::from_secs(5);
        while (handle.read_state().anchor.is_none() || handle.read_state().step_time == 0.0)
            && Instant::now() < deadline
        {
            handle.drain_feedback();
            std::thread::sleep(Duration::from_millis(5));
        }
        let state = handle.read_state().clone();
        assert!(state.playing);
        assert_eq!(state.style.id(), 2);
        assert_eq!(state.context, ContextState::Running);
        assert!((state.anchor.map(|a| a.measure_ms).unwrap_or(0.0) - 2000.0).abs() < 1e-9);

        handle.stop_beat();
        drop(handle);
        assert!(!backend.scheduled().is_empty());
    }

    #[test]
    fn lifecycle_and_sounds_apply_in_send_order() {
        let backend = Arc::new(TestBackend::running());
        let handle = AudioHandle::spawn(
            Box::new(SharedTestBackend(Arc::clone(&backend))),
            SystemClock::new(),
            EngineConfig::default(),
        );
        handle.init();
        handle.play_crystal_shatter(0, 4);
        handle.host_event(HostEvent::Hidden);
        handle.suspend();
        handle.play_crystal_shatter(1, 4);
        drop(handle);

        // the second shatter follows the suspend, so only the first sounds
        assert_eq!(backend.scheduled_kinds(), vec![UnitKind::CrystalShatter]);
    }
}
