//! Software rendering of scheduled sound events.

pub mod biquad;
pub mod limiter;
pub mod mixer;
pub mod reverb;
pub mod voice;

pub use mixer::Mixer;
