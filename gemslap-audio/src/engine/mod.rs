//! The audio core: scheduler, lifecycle, unit budget and timers composed over
//! an [`AudioBackend`].
//!
//! Everything runs on one logical timeline. The owner calls [`AudioEngine::poll`]
//! whenever the host clock may have passed [`AudioEngine::next_deadline_ms`];
//! scheduler ticks, unit cleanups and deferred jingle notes are all timer
//! tasks on that timeline. Nothing in the public API returns an error: a
//! context that is not running, a full budget or a failed resume all degrade
//! to "no sound this instant".

pub mod backend;
pub mod software;

use std::sync::mpsc::Sender;

use gemslap_types::{
    bass_pattern, pad_pattern, perc_pattern, AudioFeedback, BeatAnchor, ContextState, PadVoicing,
    Style, UnitKind,
};
use serde::{Deserialize, Serialize};

use crate::brightness::{brightness, Brightness};
use crate::budget::UnitBudget;
use crate::clock::HostClock;
use crate::graph::{EventId, SoundEvent};
use crate::lifecycle::{GesturePlan, HostEvent, Lifecycle};
use crate::scheduler::{DueStep, StepScheduler};
use crate::telemetry::TickLateness;
use crate::timer::{TimerId, TimerQueue};
use crate::units::{self, Rng};

pub use backend::{AudioBackend, BackendError, BackendResult};

/// Exempt units are torn down no sooner than this after firing.
const SHATTER_CLEANUP_FLOOR_MS: f64 = 700.0;
const FANFARE_CLEANUP_FLOOR_MS: f64 = 1200.0;
/// Upper bound on any cleanup delay; a unit holds its slot no longer than this.
const MAX_CLEANUP_DELAY_MS: f64 = 60_000.0;

const SUCCESS_NOTES: [i32; 4] = [0, 3, 7, 10];
const SUCCESS_SPACING_MS: f64 = 80.0;
const SUCCESS_DURATION: f32 = 0.5;
const SUCCESS_VOLUME: f32 = 0.14;
const FAILURE_SECOND_NOTE_MS: f64 = 130.0;

const TELEMETRY_INTERVAL_MS: f64 = 5000.0;

/// Timing and resource knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Steps whose audio time falls within this window are queued each tick.
    pub lookahead_ms: f64,
    /// Host-timer interval between scheduler ticks.
    pub tick_interval_ms: f64,
    /// Ceiling on concurrently live budget-governed units.
    pub unit_ceiling: usize,
    /// Added to a unit's lifetime before its resources are reclaimed.
    pub cleanup_margin_ms: f64,
    /// Audio-clock delay before the first step of a beat.
    pub start_offset_ms: f64,
    /// Seed for noise buffers and per-instance jitter.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookahead_ms: 80.0,
            tick_interval_ms: 20.0,
            unit_ceiling: UnitBudget::DEFAULT_CEILING,
            cleanup_margin_ms: 150.0,
            start_offset_ms: 10.0,
            seed: 12345,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Task {
    SchedulerTick,
    Cleanup { id: EventId, budgeted: bool },
    Tone { pitch: i32, duration: f32, volume: f32 },
}

pub struct AudioEngine {
    backend: Box<dyn AudioBackend>,
    clock: Box<dyn HostClock>,
    config: EngineConfig,
    /// `init` has run.
    ready: bool,
    scheduler: StepScheduler,
    lifecycle: Lifecycle,
    budget: UnitBudget,
    timers: TimerQueue<Task>,
    style: Style,
    music_enabled: bool,
    fanfare_armed: bool,
    anchor: Option<BeatAnchor>,
    rng: Rng,
    next_id: EventId,
    feedback: Option<Sender<AudioFeedback>>,
    reported_state: Option<ContextState>,
    lateness: TickLateness,
    last_telemetry_ms: f64,
}

impl AudioEngine {
    pub fn new(backend: Box<dyn AudioBackend>, clock: Box<dyn HostClock>, config: EngineConfig) -> Self {
        let now = clock.now_ms();
        Self {
            backend,
            clock,
            budget: UnitBudget::new(config.unit_ceiling),
            rng: Rng::new(config.seed),
            lateness: TickLateness::new(config.lookahead_ms),
            config,
            ready: false,
            scheduler: StepScheduler::new(),
            lifecycle: Lifecycle::new(),
            timers: TimerQueue::new(),
            style: Style::default(),
            music_enabled: true,
            fanfare_armed: false,
            anchor: None,
            next_id: 1,
            feedback: None,
            reported_state: None,
            last_telemetry_ms: now,
        }
    }

    /// Send feedback to `tx` from now on.
    pub fn set_feedback(&mut self, tx: Sender<AudioFeedback>) {
        self.feedback = Some(tx);
    }

    fn emit(&self, msg: AudioFeedback) {
        if let Some(tx) = &self.feedback {
            let _ = tx.send(msg);
        }
    }

    // ─── Context ────────────────────────────────────────────────────

    /// Mark the output usable and try to start it. Browsers and some mobile
    /// platforms refuse until a gesture; that is not an error here.
    pub fn init(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        log::debug!(target: "audio", "init: context {:?}", self.backend.state());
        if self.backend.state() == ContextState::Suspended {
            if let Err(e) = self.backend.resume() {
                log::debug!(target: "audio", "initial resume refused: {}", e);
            }
        }
        self.report_state();
    }

    /// First-gesture unlock: init if needed, then resume a suspended context.
    pub fn unlock(&mut self) {
        self.init();
        if self.backend.state().is_resumable() {
            match self.backend.resume() {
                Ok(()) => log::debug!(target: "audio", "unlocked"),
                Err(e) => log::debug!(target: "audio", "unlock resume failed: {}", e),
            }
        }
        self.report_state();
    }

    fn report_state(&mut self) {
        let state = self.backend.state();
        if self.reported_state != Some(state) {
            self.reported_state = Some(state);
            self.emit(AudioFeedback::ContextState(state));
        }
    }

    // ─── Beat ───────────────────────────────────────────────────────

    pub fn set_style(&mut self, id: u32) {
        self.style = Style::wrapping(id);
        log::debug!(target: "scheduler", "style {}", self.style);
    }

    /// When off, ticks continue but steps are silent and shockwaves and count
    /// clicks are suppressed.
    pub fn set_music_enabled(&mut self, on: bool) {
        self.music_enabled = on;
    }

    /// Start (or restart) the beat at `tempo`. `on_start` receives the host
    /// time that becomes the beat anchor, before any step is scheduled.
    pub fn start_beat(&mut self, tempo: f32, on_start: impl FnOnce(f64)) {
        if !(tempo.is_finite() && tempo > 0.0) {
            log::warn!(target: "scheduler", "ignoring start at tempo {}", tempo);
            return;
        }
        self.fanfare_armed = true;
        self.begin(tempo, on_start);
    }

    fn begin(&mut self, tempo: f32, on_start: impl FnOnce(f64)) {
        if self.scheduler.is_ticking() {
            self.stop_beat();
        }
        self.lifecycle.set_intent(true);

        let now = self.clock.now_ms();
        on_start(now);
        let anchor = BeatAnchor::from_tempo(now, tempo);
        self.anchor = Some(anchor);
        self.emit(AudioFeedback::BeatStarted(anchor));

        let first = self.backend.current_time() + self.config.start_offset_ms / 1000.0;
        self.scheduler.begin(tempo, first);
        log::debug!(
            target: "scheduler",
            "beat start: {} bpm, step {:.4}s, first step at {:.3}",
            tempo,
            self.scheduler.step_duration(),
            first
        );
        self.tick(now, now);
    }

    /// Cancel the pending tick and clear the intent. Sounds already queued
    /// play out.
    pub fn stop_beat(&mut self) {
        if let Some(id) = self.scheduler.take_pending_tick() {
            self.timers.cancel(id);
        }
        if self.lifecycle.intent() {
            self.emit(AudioFeedback::BeatStopped);
        }
        self.lifecycle.set_intent(false);
    }

    fn restart(&mut self) {
        let tempo = self.scheduler.tempo();
        log::debug!(target: "lifecycle", "restarting scheduler at {} bpm", tempo);
        self.begin(tempo, |_| {});
    }

    fn tick(&mut self, due_ms: f64, now_ms: f64) {
        self.scheduler.set_pending_tick(None);
        if !self.lifecycle.intent() {
            return;
        }
        self.lateness.observe(due_ms, now_ms);

        let audio_now = self.backend.current_time();
        let due = self
            .scheduler
            .due_steps(audio_now, self.config.lookahead_ms / 1000.0);
        for step in due {
            self.fire_step(step);
        }

        let next = now_ms + self.config.tick_interval_ms.max(1.0);
        let id = self.timers.schedule(next, Task::SchedulerTick);
        self.scheduler.set_pending_tick(Some(id));
    }

    fn fire_step(&mut self, step: DueStep) {
        let style = self.style;
        let time = step.time + style.swing_offset(step.step, self.scheduler.step_duration());
        self.emit(AudioFeedback::StepFired {
            step: step.step,
            loop_count: step.loop_count,
            style,
            time,
        });
        if !self.music_enabled {
            return;
        }

        let i = step.step;
        if let Some(bass) = bass_pattern(style.id())[i] {
            self.trigger(units::sub_bass(time, bass.pitch, bass.velocity, bass.duration));
        }
        if let Some(pad) = pad_pattern(style.id())[i] {
            let event = match pad.voicing {
                PadVoicing::Sustain => units::warble_pad(time, pad.pitches, pad.velocity),
                PadVoicing::Stab => units::chord_stab(time, pad.pitches, pad.velocity),
            };
            self.trigger(event);
        }

        let perc = perc_pattern(style.id());
        if perc.kick[i] > 0.0 {
            self.trigger(units::kick(time, perc.kick[i]));
        }
        if perc.snare[i] > 0.0 {
            let event = units::tape_snap(time, perc.snare[i], &mut self.rng);
            self.trigger(event);
        }
        if perc.hihat[i] != 0.0 {
            let hat = perc.hihat[i];
            let event = units::hihat(time, hat.abs(), hat < 0.0, &mut self.rng);
            self.trigger(event);
        }
        if perc.texture[i] > 0.0 {
            let event = units::texture_grain(time, perc.texture[i], &mut self.rng);
            self.trigger(event);
        }
    }

    // ─── Units ──────────────────────────────────────────────────────

    /// Hand `event` to the backend and arm its cleanup. Returns the event id,
    /// or `None` when the context is not ready or the budget refused it.
    fn trigger(&mut self, event: SoundEvent) -> Option<EventId> {
        if !self.ready || !self.backend.state().is_running() {
            log::trace!(target: "units", "{} skipped: context not ready", event.kind.name());
            return None;
        }
        let exempt = event.kind.is_exempt();
        if !exempt && !self.budget.acquire() {
            log::debug!(
                target: "units",
                "{} dropped: {} units live",
                event.kind.name(),
                self.budget.active()
            );
            self.emit(AudioFeedback::UnitDropped(event.kind));
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        if let Err(e) = self.backend.schedule(id, &event) {
            log::debug!(target: "units", "{} not scheduled: {}", event.kind.name(), e);
            if !exempt {
                self.budget.release();
            }
            return None;
        }

        let lead_ms = (event.start - self.backend.current_time()).max(0.0) * 1000.0;
        let life_ms = f64::from(event.lifetime) * 1000.0 + self.config.cleanup_margin_ms;
        let delay = lead_ms
            + match event.kind {
                UnitKind::CrystalShatter => life_ms.max(SHATTER_CLEANUP_FLOOR_MS),
                UnitKind::LevelClearFanfare => life_ms.max(FANFARE_CLEANUP_FLOOR_MS),
                _ => life_ms,
            };
        // f64::min also maps NaN to the bound
        let delay = delay.min(MAX_CLEANUP_DELAY_MS);
        let now = self.clock.now_ms();
        self.timers.schedule(
            now + delay,
            Task::Cleanup {
                id,
                budgeted: !exempt,
            },
        );
        Some(id)
    }

    fn audio_now(&self) -> f64 {
        self.backend.current_time()
    }

    /// Melodic tone, snapped to the pentatonic scale.
    pub fn play_tone(&mut self, pitch: i32, duration: f32, volume: f32) {
        let event = units::tone(self.audio_now(), pitch, duration, volume);
        self.trigger(event);
    }

    pub fn play_shockwave(&mut self, strength: f32) {
        if !self.music_enabled {
            return;
        }
        let event = units::shockwave(self.audio_now(), strength, &mut self.rng);
        self.trigger(event);
    }

    /// Break sound for crystal `index` of `total`. Never dropped.
    pub fn play_crystal_shatter(&mut self, index: u32, total: u32) {
        let event = units::crystal_shatter(self.audio_now(), index, total, &mut self.rng);
        self.trigger(event);
    }

    /// Plays once per beat session.
    pub fn play_level_clear_fanfare(&mut self) {
        if !self.fanfare_armed {
            log::debug!(target: "units", "fanfare already played");
            return;
        }
        let event = units::level_clear_fanfare(self.audio_now(), &mut self.rng);
        if self.trigger(event).is_some() {
            self.fanfare_armed = false;
        }
    }

    pub fn play_success_jingle(&mut self) {
        let now = self.clock.now_ms();
        for (i, &pitch) in SUCCESS_NOTES.iter().enumerate() {
            if i == 0 {
                self.play_tone(pitch, SUCCESS_DURATION, SUCCESS_VOLUME);
            } else {
                self.timers.schedule(
                    now + SUCCESS_SPACING_MS * i as f64,
                    Task::Tone {
                        pitch,
                        duration: SUCCESS_DURATION,
                        volume: SUCCESS_VOLUME,
                    },
                );
            }
        }
    }

    pub fn play_failure_jingle(&mut self) {
        let now = self.clock.now_ms();
        self.play_tone(2, 0.2, 0.13);
        self.timers.schedule(
            now + FAILURE_SECOND_NOTE_MS,
            Task::Tone {
                pitch: -2,
                duration: 0.26,
                volume: 0.11,
            },
        );
        let event = units::failure_thud(self.audio_now());
        self.trigger(event);
    }

    pub fn play_count_click(&mut self, accent: bool) {
        if !self.music_enabled {
            return;
        }
        let event = units::count_click(self.audio_now(), accent);
        self.trigger(event);
    }

    // ─── Lifecycle ──────────────────────────────────────────────────

    /// Platform visibility/focus signal. Hiding cancels the pending tick;
    /// the others only leave a hint for the next gesture.
    pub fn on_host_event(&mut self, event: HostEvent) {
        if self.lifecycle.on_host_event(event) {
            if let Some(id) = self.scheduler.take_pending_tick() {
                self.timers.cancel(id);
                log::debug!(target: "lifecycle", "hidden: tick cancelled");
            }
        }
    }

    /// Suspend the output the way the platform does when backgrounded.
    pub fn suspend_output(&mut self) {
        if let Err(e) = self.backend.suspend() {
            log::debug!(target: "lifecycle", "suspend failed: {}", e);
        }
        self.report_state();
    }

    /// A genuine user interaction: the only place playback is revived.
    pub fn on_gesture(&mut self) {
        self.init();
        let plan = self.lifecycle.plan_gesture(
            self.backend.state(),
            self.scheduler.tempo(),
            self.scheduler.is_ticking(),
        );
        match plan {
            GesturePlan::Resume => match self.backend.resume() {
                Ok(()) => {
                    if self
                        .lifecycle
                        .wants_restart(self.scheduler.tempo(), self.scheduler.is_ticking())
                    {
                        self.restart();
                    }
                    self.lifecycle.settle();
                }
                Err(e) => {
                    log::debug!(target: "lifecycle", "resume failed, will retry: {}", e);
                }
            },
            GesturePlan::Restart => {
                self.restart();
                self.lifecycle.settle();
            }
            GesturePlan::ClearHint => self.lifecycle.settle(),
            GesturePlan::Nothing => {}
        }
        self.report_state();
    }

    // ─── Timeline ───────────────────────────────────────────────────

    /// Run every timer task due at the current host time.
    pub fn poll(&mut self) {
        let now = self.clock.now_ms();
        while let Some((timer, task)) = self.timers.pop_due(now) {
            self.run_task(timer, task, now);
        }
        self.report_state();
        if now - self.last_telemetry_ms >= TELEMETRY_INTERVAL_MS {
            self.last_telemetry_ms = now;
            self.emit_telemetry();
        }
    }

    fn run_task(&mut self, timer: TimerId, task: Task, now: f64) {
        match task {
            Task::SchedulerTick => {
                if self.scheduler.pending_tick() == Some(timer) {
                    self.tick(timer.due_ms(), now);
                }
            }
            Task::Cleanup { id, budgeted } => {
                if let Err(e) = self.backend.release(id) {
                    log::debug!(target: "units", "release {} failed: {}", id, e);
                }
                if budgeted {
                    self.budget.release();
                }
            }
            Task::Tone {
                pitch,
                duration,
                volume,
            } => self.play_tone(pitch, duration, volume),
        }
    }

    fn emit_telemetry(&mut self) {
        let r = self.lateness.report();
        log::debug!(
            target: "audio",
            "tick lateness avg {:.2}ms max {:.2}ms p95 {:.2}ms, late {}, units {}/{}, dropped {}",
            r.avg_ms,
            r.max_ms,
            r.p95_ms,
            r.late_ticks,
            self.budget.active(),
            self.budget.ceiling(),
            self.budget.dropped()
        );
        self.emit(AudioFeedback::Telemetry {
            avg_lateness_ms: r.avg_ms,
            max_lateness_ms: r.max_ms,
            p95_lateness_ms: r.p95_ms,
            late_ticks: r.late_ticks,
            dropped_units: self.budget.dropped(),
            active_units: self.budget.active(),
        });
    }

    /// Host time of the earliest pending task.
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.timers.next_deadline_ms()
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    // ─── Read side ──────────────────────────────────────────────────

    pub fn current_step(&self) -> usize {
        self.scheduler.current_step()
    }

    pub fn loop_count(&self) -> u64 {
        self.scheduler.loop_count()
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn tempo(&self) -> f32 {
        self.scheduler.tempo()
    }

    pub fn beat_anchor(&self) -> Option<BeatAnchor> {
        self.anchor
    }

    /// Brightness of a target on `phrase_beat`, at the current host time.
    pub fn brightness(&self, phrase_beat: u32) -> Brightness {
        brightness(self.anchor.as_ref(), self.clock.now_ms(), phrase_beat)
    }

    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_ticking()
    }

    pub fn intent(&self) -> bool {
        self.lifecycle.intent()
    }

    pub fn needs_resume(&self) -> bool {
        self.lifecycle.needs_resume()
    }

    pub fn context_state(&self) -> ContextState {
        self.backend.state()
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn active_units(&self) -> usize {
        self.budget.active()
    }

    pub fn dropped_units(&self) -> u64 {
        self.budget.dropped()
    }
}
