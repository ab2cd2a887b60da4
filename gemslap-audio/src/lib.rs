//! # gemslap-audio
//!
//! The procedural audio core: a look-ahead step scheduler driving a
//! generative backing track, game-feedback sound effects sharing a bounded
//! unit budget, gesture-gated resume, and the beat-phase brightness signal
//! the renderer pulses to.

mod audio_thread;
pub mod brightness;
pub mod budget;
pub mod clock;
pub mod commands;
pub mod dsp;
pub mod engine;
pub mod export;
pub mod graph;
pub mod handle;
pub mod lifecycle;
pub mod output;
pub mod scheduler;
pub mod telemetry;
pub mod timer;
pub mod units;

pub use brightness::{brightness, Brightness};
pub use clock::{HostClock, ManualClock, SystemClock};
pub use engine::software::SoftwareBackend;
pub use engine::{AudioBackend, AudioEngine, BackendError, BackendResult, EngineConfig};
pub use export::{export_wav, ExportOptions, ExportSummary};
pub use handle::{AudioHandle, AudioReadState};
pub use lifecycle::HostEvent;
pub use output::AudioOutput;
