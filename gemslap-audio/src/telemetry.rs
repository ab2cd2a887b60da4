//! How late the host timer runs scheduler ticks.
//!
//! A tick that runs later than the look-ahead window can queue steps whose
//! audio time has already passed. Lateness is collected between reports and
//! summarised when the engine emits [`AudioFeedback::Telemetry`].
//!
//! [`AudioFeedback::Telemetry`]: gemslap_types::AudioFeedback::Telemetry

use std::collections::VecDeque;

/// Samples kept between two reports; older ones fall off the front.
const WINDOW: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatenessReport {
    pub avg_ms: f32,
    pub max_ms: f32,
    /// Nearest-rank 95th percentile.
    pub p95_ms: f32,
    /// Ticks later than the threshold since the engine was built.
    pub late_ticks: u32,
}

pub struct TickLateness {
    threshold_ms: f64,
    samples: VecDeque<f32>,
    late_ticks: u32,
}

impl TickLateness {
    /// Ticks later than `threshold_ms` are counted as late.
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms: threshold_ms.max(0.0),
            samples: VecDeque::with_capacity(WINDOW),
            late_ticks: 0,
        }
    }

    /// A tick due at `due_ms` ran at `ran_ms`. Early ticks count as on time.
    pub fn observe(&mut self, due_ms: f64, ran_ms: f64) {
        let late = ran_ms - due_ms;
        let late = if late.is_finite() { late.max(0.0) } else { 0.0 };
        if late > self.threshold_ms {
            self.late_ticks = self.late_ticks.saturating_add(1);
        }
        if self.samples.len() == WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(late as f32);
    }

    /// Summarise the samples observed since the last report and start a
    /// new window.
    pub fn report(&mut self) -> LatenessReport {
        let late_ticks = self.late_ticks;
        if self.samples.is_empty() {
            return LatenessReport {
                late_ticks,
                ..LatenessReport::default()
            };
        }

        let mut sorted: Vec<f32> = self.samples.drain(..).collect();
        sorted.sort_unstable_by(f32::total_cmp);
        let n = sorted.len();
        let rank = (n * 95).div_ceil(100).max(1);
        LatenessReport {
            avg_ms: sorted.iter().sum::<f32>() / n as f32,
            max_ms: sorted[n - 1],
            p95_ms: sorted[rank - 1],
            late_ticks,
        }
    }
}
