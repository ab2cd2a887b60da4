//! The audio thread: sleep until the engine's next deadline or a command,
//! apply waiting commands, then let the engine run its due timer tasks.

use std::ops::ControlFlow;
use std::time::Duration;

use crossbeam_channel::{Receiver, Select, TryRecvError};

use super::commands::AudioCmd;
use super::engine::AudioEngine;

/// Longest sleep with nothing pending, so device-side context changes are
/// still reported promptly.
const IDLE_WAIT: Duration = Duration::from_millis(50);

/// Commands applied between two engine polls; a burst cannot starve ticks.
const BATCH: usize = 64;

enum Next {
    Cmd(AudioCmd),
    Empty,
    Hangup,
}

/// Both command channels. Every read looks at the priority channel first,
/// so a priority command sent before a normal one is always applied first.
pub(crate) struct Inbox {
    priority: Receiver<AudioCmd>,
    normal: Receiver<AudioCmd>,
}

impl Inbox {
    pub(crate) fn new(priority: Receiver<AudioCmd>, normal: Receiver<AudioCmd>) -> Self {
        Self { priority, normal }
    }

    fn take(&self) -> Next {
        for rx in [&self.priority, &self.normal] {
            match rx.try_recv() {
                Ok(cmd) => return Next::Cmd(cmd),
                Err(TryRecvError::Disconnected) => return Next::Hangup,
                Err(TryRecvError::Empty) => {}
            }
        }
        Next::Empty
    }

    /// Block up to `timeout` until either channel has something, then take.
    fn wait(&self, timeout: Duration) -> Next {
        match self.take() {
            Next::Empty => {}
            next => return next,
        }
        let mut ready = Select::new();
        ready.recv(&self.priority);
        ready.recv(&self.normal);
        // readiness only; the receive itself goes through `take`
        let _ = ready.ready_timeout(timeout);
        self.take()
    }
}

pub(crate) struct AudioThread {
    engine: AudioEngine,
    inbox: Inbox,
}

impl AudioThread {
    pub(crate) fn new(engine: AudioEngine, inbox: Inbox) -> Self {
        Self { engine, inbox }
    }

    pub(crate) fn run(mut self) {
        while self.step().is_continue() {}
        self.engine.stop_beat();
        log::debug!(target: "audio", "audio thread exiting");
    }

    /// One wake-up: wait, apply up to a batch of commands, poll.
    fn step(&mut self) -> ControlFlow<()> {
        let mut next = self.inbox.wait(self.sleep_for());
        for applied in 1..=BATCH {
            match std::mem::replace(&mut next, Next::Empty) {
                Next::Cmd(cmd) => self.apply(cmd)?,
                Next::Hangup => return ControlFlow::Break(()),
                Next::Empty => break,
            }
            if applied < BATCH {
                next = self.inbox.take();
            }
        }
        self.engine.poll();
        ControlFlow::Continue(())
    }

    fn sleep_for(&self) -> Duration {
        self.engine
            .next_deadline_ms()
            .map(|due| {
                let ms = (due - self.engine.now_ms()).max(0.0);
                Duration::from_secs_f64(ms / 1000.0).min(IDLE_WAIT)
            })
            .unwrap_or(IDLE_WAIT)
    }

    fn apply(&mut self, cmd: AudioCmd) -> ControlFlow<()> {
        let engine = &mut self.engine;
        match cmd {
            AudioCmd::Init => engine.init(),
            AudioCmd::Unlock => engine.unlock(),
            AudioCmd::Gesture => engine.on_gesture(),
            AudioCmd::HostEvent(event) => engine.on_host_event(event),
            AudioCmd::Suspend => engine.suspend_output(),
            AudioCmd::SetStyle(id) => engine.set_style(id),
            AudioCmd::SetMusicEnabled(on) => engine.set_music_enabled(on),
            AudioCmd::StartBeat { tempo } => engine.start_beat(tempo, |_| {}),
            AudioCmd::StopBeat => engine.stop_beat(),
            AudioCmd::PlayTone {
                pitch,
                duration,
                volume,
            } => engine.play_tone(pitch, duration, volume),
            AudioCmd::PlayShockwave { strength } => engine.play_shockwave(strength),
            AudioCmd::PlayCrystalShatter { index, total } => {
                engine.play_crystal_shatter(index, total)
            }
            AudioCmd::PlayLevelClearFanfare => engine.play_level_clear_fanfare(),
            AudioCmd::PlaySuccessJingle => engine.play_success_jingle(),
            AudioCmd::PlayFailureJingle => engine.play_failure_jingle(),
            AudioCmd::PlayCountClick { accent } => engine.play_count_click(accent),
            AudioCmd::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }
}
