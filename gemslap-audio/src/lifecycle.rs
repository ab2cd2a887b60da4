//! Playback intent and gesture-gated resume.
//!
//! Platform visibility and focus signals are unreliable (a hard lock may
//! never report "hidden"), so they never decide whether music should play.
//! `intent` is set only by explicit start/stop; a genuine user gesture is the
//! single place where a dead scheduler is brought back.

use gemslap_types::ContextState;

/// Platform lifecycle signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Page or app went to the background.
    Hidden,
    /// Page became visible again.
    Visible,
    /// Restored from a back/forward cache or lock screen.
    PageShow,
    /// Window regained focus.
    Focus,
}

/// What a gesture should do, given the current context and scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePlan {
    /// Resume the context, then restart the scheduler if it should be running.
    Resume,
    /// Context is alive but the scheduler died: restart directly.
    Restart,
    /// Nothing to revive; drop the resume hint.
    ClearHint,
    Nothing,
}

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    intent: bool,
    needs_resume: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> bool {
        self.intent
    }

    pub fn needs_resume(&self) -> bool {
        self.needs_resume
    }

    pub fn set_intent(&mut self, playing: bool) {
        self.intent = playing;
    }

    /// Record a host signal. Returns true when the pending tick must be
    /// cancelled. Intent is never touched here.
    pub fn on_host_event(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Hidden => true,
            HostEvent::Visible | HostEvent::PageShow | HostEvent::Focus => {
                self.needs_resume = true;
                false
            }
        }
    }

    /// The scheduler should be running but is not.
    pub fn wants_restart(&self, tempo: f32, ticking: bool) -> bool {
        self.intent && tempo > 0.0 && !ticking
    }

    pub fn plan_gesture(&self, state: ContextState, tempo: f32, ticking: bool) -> GesturePlan {
        if state.is_resumable() {
            GesturePlan::Resume
        } else if state.is_running() {
            if self.wants_restart(tempo, ticking) {
                GesturePlan::Restart
            } else if self.needs_resume {
                GesturePlan::ClearHint
            } else {
                GesturePlan::Nothing
            }
        } else {
            GesturePlan::Nothing
        }
    }

    /// A resume (or direct restart) completed.
    pub fn settle(&mut self) {
        self.needs_resume = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_never_changes_intent() {
        let mut lc = Lifecycle::new();
        lc.set_intent(true);
        assert!(lc.on_host_event(HostEvent::Hidden));
        assert!(lc.intent());
        assert!(!lc.on_host_event(HostEvent::Visible));
        assert!(lc.intent());
        assert!(lc.needs_resume());

        lc.set_intent(false);
        lc.on_host_event(HostEvent::Focus);
        assert!(!lc.intent());
    }

    #[test]
    fn suspended_or_interrupted_resumes_first() {
        let lc = Lifecycle::new();
        assert_eq!(lc.plan_gesture(ContextState::Suspended, 120.0, false), GesturePlan::Resume);
        assert_eq!(lc.plan_gesture(ContextState::Interrupted, 0.0, true), GesturePlan::Resume);
    }

    #[test]
    fn zombie_running_context_restarts_directly() {
        let mut lc = Lifecycle::new();
        lc.set_intent(true);
        assert_eq!(lc.plan_gesture(ContextState::Running, 130.0, false), GesturePlan::Restart);
        assert_eq!(lc.plan_gesture(ContextState::Running, 130.0, true), GesturePlan::Nothing);
        // never started: no tempo to restart with
        assert_eq!(lc.plan_gesture(ContextState::Running, 0.0, false), GesturePlan::Nothing);
    }

    #[test]
    fn hint_alone_is_cleared_without_restart() {
        let mut lc = Lifecycle::new();
        lc.on_host_event(HostEvent::PageShow);
        assert_eq!(lc.plan_gesture(ContextState::Running, 130.0, false), GesturePlan::ClearHint);
        lc.settle();
        assert!(!lc.needs_resume());
    }

    #[test]
    fn closed_context_is_left_alone() {
        let mut lc = Lifecycle::new();
        lc.set_intent(true);
        assert_eq!(lc.plan_gesture(ContextState::Closed, 130.0, false), GesturePlan::Nothing);
    }
}
