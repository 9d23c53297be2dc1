//! Voice screen: microphone recording and speech transcription
//!
//! The platform services are reached through two small capability traits,
//! [`AudioCapture`] and [`SpeechRecognizer`], so the session logic runs with
//! fakes in tests and without any audio hardware present.

mod buffer;
#[cfg(feature = "audio-io")]
mod microphone;
mod session;
mod transcript;
mod wav;

pub use buffer::CaptureBuffer;
#[cfg(feature = "audio-io")]
pub use microphone::MicrophoneCapture;
pub use session::{VoiceOutcome, VoiceSession, VoiceState};
pub use transcript::{SpeechEvent, SpeechRecognizer, TranscriptSession, TranscriptState};
pub use wav::{read_wav, write_wav};

use crate::error::{Result, SkedgeError};
use std::path::PathBuf;
use std::time::Duration;

/// Microphone access as reported by the platform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionStatus {
    #[default]
    Undetermined,
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

impl std::fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionStatus::Undetermined => write!(f, "undetermined"),
            PermissionStatus::Granted => write!(f, "granted"),
            PermissionStatus::Denied => write!(f, "denied"),
        }
    }
}

/// A finished recording stored on disk
#[derive(Clone, Debug, PartialEq)]
pub struct Recording {
    /// Location of the WAV file
    pub path: PathBuf,
    pub sample_rate: u32,
    /// Number of mono samples written
    pub samples: usize,
}

impl Recording {
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples as f64 / self.sample_rate as f64)
    }
}

/// Start/stop microphone capture
pub trait AudioCapture {
    /// Ask the platform for microphone access
    fn request_permission(&mut self) -> PermissionStatus;

    /// Begin capturing; calling while already capturing is a no-op
    fn start(&mut self) -> Result<()>;

    /// Stop capturing and store what was recorded
    fn stop(&mut self) -> Result<Recording>;

    fn is_capturing(&self) -> bool;

    /// Move audio captured since the last call into storage
    ///
    /// Hosts call this once per UI frame while recording.
    fn poll(&mut self) -> usize {
        0
    }
}

impl<T: AudioCapture + ?Sized> AudioCapture for Box<T> {
    fn request_permission(&mut self) -> PermissionStatus {
        (**self).request_permission()
    }

    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<Recording> {
        (**self).stop()
    }

    fn is_capturing(&self) -> bool {
        (**self).is_capturing()
    }

    fn poll(&mut self) -> usize {
        (**self).poll()
    }
}

/// Capture used when the build has no audio backend
#[derive(Debug, Default)]
pub struct UnavailableCapture;

impl AudioCapture for UnavailableCapture {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    fn start(&mut self) -> Result<()> {
        Err(SkedgeError::AudioDeviceError(
            "built without audio support".to_string(),
        ))
    }

    fn stop(&mut self) -> Result<Recording> {
        Err(SkedgeError::AudioDeviceError("not recording".to_string()))
    }

    fn is_capturing(&self) -> bool {
        false
    }
}
