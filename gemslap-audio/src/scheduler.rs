//! Look-ahead step cursor.
//!
//! Steps are placed on the audio clock, not on the host timer: each tick
//! collects every step whose audio time falls inside the look-ahead window,
//! so host timer jitter only changes *when* a step is queued, never *where*
//! it lands.

use gemslap_types::STEPS_PER_LOOP;

use crate::timer::TimerId;

/// A step ready to fire, with its exact grid time in audio-clock seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueStep {
    pub step: usize,
    pub loop_count: u64,
    pub time: f64,
}

#[derive(Debug, Clone)]
pub struct StepScheduler {
    tempo: f32,
    step_duration: f64,
    next_step: usize,
    next_step_time: f64,
    loop_count: u64,
    /// Last step handed out.
    current_step: usize,
    /// Armed tick timer; `None` means the scheduler is not ticking.
    pending_tick: Option<TimerId>,
}

impl StepScheduler {
    pub fn new() -> Self {
        Self {
            tempo: 0.0,
            step_duration: 0.0,
            next_step: 0,
            next_step_time: 0.0,
            loop_count: 0,
            current_step: 0,
            pending_tick: None,
        }
    }

    /// 16th-note length at `tempo` beats per minute.
    pub fn step_duration_for(tempo: f32) -> f64 {
        60.0 / (f64::from(tempo) * 4.0)
    }

    /// Reset the cursor so step 0 lands at `first_step_time`.
    pub fn begin(&mut self, tempo: f32, first_step_time: f64) {
        self.tempo = tempo;
        self.step_duration = Self::step_duration_for(tempo);
        self.next_step = 0;
        self.loop_count = 0;
        self.current_step = 0;
        self.next_step_time = first_step_time;
    }

    /// Pop every step that starts before `audio_now + lookahead`.
    pub fn due_steps(&mut self, audio_now: f64, lookahead: f64) -> Vec<DueStep> {
        let mut due = Vec::new();
        if self.step_duration <= 0.0 {
            return due;
        }
        let horizon = audio_now + lookahead;
        while self.next_step_time < horizon {
            due.push(DueStep {
                step: self.next_step,
                loop_count: self.loop_count,
                time: self.next_step_time,
            });
            self.current_step = self.next_step;
            self.next_step += 1;
            if self.next_step >= STEPS_PER_LOOP {
                self.next_step = 0;
                self.loop_count += 1;
            }
            self.next_step_time += self.step_duration;
        }
        due
    }

    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    pub fn step_duration(&self) -> f64 {
        self.step_duration
    }

    pub fn next_step(&self) -> usize {
        self.next_step
    }

    pub fn loop_count(&self) -> u64 {
        self.loop_count
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_ticking(&self) -> bool {
        self.pending_tick.is_some()
    }

    pub fn pending_tick(&self) -> Option<TimerId> {
        self.pending_tick
    }

    pub fn set_pending_tick(&mut self, tick: Option<TimerId>) {
        self.pending_tick = tick;
    }

    /// Forget the armed tick, returning it so the caller can cancel the timer.
    pub fn take_pending_tick(&mut self) -> Option<TimerId> {
        self.pending_tick.take()
    }
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteenth_at_120_is_an_eighth_second() {
        assert!((StepScheduler::step_duration_for(120.0) - 0.125).abs() < 1e-12);
    }

    #[test]
    fn collects_only_steps_inside_window() {
        let mut s = StepScheduler::new();
        s.begin(120.0, 0.01);
        let due = s.due_steps(0.0, 0.08);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].step, 0);
        assert!((due[0].time - 0.01).abs() < 1e-12);
        // nothing new until the window reaches 0.135
        assert!(s.due_steps(0.05, 0.08).is_empty());
        let due = s.due_steps(0.06, 0.08);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].step, 1);
    }

    #[test]
    fn wraps_and_counts_loops() {
        let mut s = StepScheduler::new();
        s.begin(120.0, 0.0);
        let due = s.due_steps(32.0 * 0.125 - 0.08 - 1e-9, 0.08);
        assert_eq!(due.len(), 32);
        assert_eq!(s.loop_count(), 1);
        assert_eq!(s.next_step(), 0);
        assert_eq!(s.current_step(), 31);
        assert!(due.windows(2).all(|w| w[1].time > w[0].time));
        assert!(due.iter().all(|d| d.loop_count == 0));
    }

    #[test]
    fn late_tick_catches_up_in_order() {
        let mut s = StepScheduler::new();
        s.begin(150.0, 0.0);
        let due = s.due_steps(1.0, 0.08);
        let steps: Vec<usize> = due.iter().map(|d| d.step).collect();
        assert_eq!(steps, (0..11).collect::<Vec<_>>());
    }
}
