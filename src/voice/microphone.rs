//! Microphone capture using cpal
//!
//! Captures from the default input device, downmixes to mono and streams
//! chunks over a crossbeam channel into a [`CaptureBuffer`]. Stopping writes
//! the buffer to a WAV file in the recordings directory.

use super::buffer::CaptureBuffer;
use super::wav::write_wav;
use super::{AudioCapture, PermissionStatus, Recording};
use crate::error::{Result, SkedgeError};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

struct OpenDevice {
    device: Device,
    config: StreamConfig,
}

/// [`AudioCapture`] backed by the system's default microphone
pub struct MicrophoneCapture {
    input: Option<OpenDevice>,
    stream: Option<Stream>,
    is_recording: Arc<AtomicBool>,
    samples_tx: Sender<Vec<f32>>,
    samples_rx: Receiver<Vec<f32>>,
    buffer: Option<CaptureBuffer>,
    recordings_dir: PathBuf,
    max_recording_secs: u32,
}

impl MicrophoneCapture {
    /// Create a capture that stores recordings under `recordings_dir`
    ///
    /// The input device is opened lazily by [`AudioCapture::request_permission`].
    pub fn new(
        recordings_dir: impl Into<PathBuf>,
        max_recording_secs: u32,
        channel_capacity: usize,
    ) -> Self {
        let (samples_tx, samples_rx) = bounded(channel_capacity);
        Self {
            input: None,
            stream: None,
            is_recording: Arc::new(AtomicBool::new(false)),
            samples_tx,
            samples_rx,
            buffer: None,
            recordings_dir: recordings_dir.into(),
            max_recording_secs,
        }
    }

    fn open_default_device() -> Result<OpenDevice> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| SkedgeError::AudioDeviceError("No input device available".into()))?;

        let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
        info!("Using input device: {}", device_name);

        let supported_config = device.default_input_config().map_err(|e| {
            SkedgeError::AudioDeviceError(format!("Failed to get input config: {}", e))
        })?;
        let config: StreamConfig = supported_config.into();

        info!(
            "Audio config: {}Hz, {} channel(s)",
            config.sample_rate.0, config.channels
        );

        Ok(OpenDevice { device, config })
    }

    /// Move captured chunks from the channel into the buffer
    ///
    /// Called every UI frame while recording so the channel never fills up.
    pub fn pump(&self) -> usize {
        let Some(buffer) = &self.buffer else {
            return 0;
        };
        let mut moved = 0;
        while let Ok(samples) = self.samples_rx.try_recv() {
            moved += buffer.write(&samples);
        }
        moved
    }

    pub fn buffered_samples(&self) -> usize {
        self.buffer.as_ref().map_or(0, CaptureBuffer::len)
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.input.as_ref().map(|input| input.config.sample_rate.0)
    }
}

impl AudioCapture for MicrophoneCapture {
    fn request_permission(&mut self) -> PermissionStatus {
        if self.input.is_some() {
            return PermissionStatus::Granted;
        }
        match Self::open_default_device() {
            Ok(input) => {
                self.input = Some(input);
                PermissionStatus::Granted
            }
            Err(e) => {
                warn!("Microphone unavailable: {}", e);
                PermissionStatus::Denied
            }
        }
    }

    fn start(&mut self) -> Result<()> {
        if self.is_recording.load(Ordering::SeqCst) {
            warn!("Already recording, ignoring start request");
            return Ok(());
        }

        let input = self
            .input
            .as_ref()
            .ok_or_else(|| SkedgeError::AudioDeviceError("Input device not opened".into()))?;

        let channels = input.config.channels as usize;
        let sample_rate = input.config.sample_rate.0;
        let is_recording = Arc::clone(&self.is_recording);
        let samples_tx = self.samples_tx.clone();

        // Leftovers from a previous take
        while self.samples_rx.try_recv().is_ok() {}
        self.buffer = Some(CaptureBuffer::for_duration(self.max_recording_secs, sample_rate));

        let err_fn = |err| {
            error!("Audio input stream error: {}", err);
        };

        let stream = input
            .device
            .build_input_stream(
                &input.config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if !is_recording.load(Ordering::SeqCst) {
                        return;
                    }

                    let samples = if channels == 1 {
                        data.to_vec()
                    } else {
                        data.chunks(channels)
                            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                            .collect()
                    };

                    if let Err(e) = samples_tx.try_send(samples) {
                        debug!("Dropping audio chunk: {}", e);
                    }
                },
                err_fn,
                None,
            )
            .map_err(|e| {
                SkedgeError::AudioDeviceError(format!("Failed to build input stream: {}", e))
            })?;

        stream.play().map_err(|e| {
            SkedgeError::AudioDeviceError(format!("Failed to start input stream: {}", e))
        })?;

        self.is_recording.store(true, Ordering::SeqCst);
        self.stream = Some(stream);
        info!("Microphone capture started: {}Hz, {} channel(s)", sample_rate, channels);
        Ok(())
    }

    fn stop(&mut self) -> Result<Recording> {
        self.is_recording.store(false, Ordering::SeqCst);
        if let Some(stream) = self.stream.take() {
            drop(stream);
        }
        self.pump();

        let sample_rate = self
            .sample_rate()
            .ok_or_else(|| SkedgeError::AudioDeviceError("Input device not opened".into()))?;
        let samples = self
            .buffer
            .take()
            .map(|buffer| buffer.drain())
            .unwrap_or_default();

        let path = self.recordings_dir.join(format!("{}.wav", Uuid::new_v4()));
        write_wav(&path, &samples, sample_rate)?;

        Ok(Recording {
            path,
            sample_rate,
            samples: samples.len(),
        })
    }

    fn is_capturing(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    fn poll(&mut self) -> usize {
        self.pump()
    }
}

impl Drop for MicrophoneCapture {
    fn drop(&mut self) {
        self.is_recording.store(false, Ordering::SeqCst);
        self.stream.take();
    }
}
