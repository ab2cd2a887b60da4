//! Real-time output through cpal.
//!
//! The device callback pulls from the [`SoftwareBackend`]'s mixer. Stream
//! errors are mapped onto the context state so the lifecycle logic sees an
//! interruption the same way it would see an OS suspension.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Stream, StreamConfig, StreamError};

use gemslap_types::ContextState;

use crate::engine::software::SoftwareBackend;

/// Keeps the device stream alive. Drop it to close the output.
pub struct AudioOutput {
    _stream: Stream,
    device_name: String,
    sample_rate: u32,
    channels: u16,
}

impl AudioOutput {
    /// Open the default output device and a backend rendering at its rate.
    /// The context starts suspended; the engine resumes it.
    pub fn open_default() -> Result<(SoftwareBackend, AudioOutput), String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| "No output device available".to_string())?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let config = device
            .default_output_config()
            .map_err(|e| format!("Failed to get output config: {}", e))?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels();
        let stream_config: StreamConfig = config.into();

        let backend = SoftwareBackend::new(sample_rate);
        let renderer = backend.renderer(channels as usize);
        let status = renderer.clone();

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    renderer.render(data);
                },
                move |err| {
                    log::error!(target: "audio", "Audio output error: {}", err);
                    let state = match err {
                        StreamError::DeviceNotAvailable => ContextState::Closed,
                        _ => ContextState::Interrupted,
                    };
                    status.set_state(state);
                },
                None,
            )
            .map_err(|e| format!("Failed to build output stream: {}", e))?;

        stream
            .play()
            .map_err(|e| format!("Failed to start output stream: {}", e))?;

        log::debug!(
            target: "audio",
            "output on {} at {} Hz, {} channels",
            device_name,
            sample_rate,
            channels
        );
        Ok((
            backend,
            AudioOutput {
                _stream: stream,
                device_name,
                sample_rate,
                channels,
            },
        ))
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}
