//! "Tap to Chat" recording session
//!
//! One button toggles recording. Starting requires granted microphone
//! permission; stopping stores the capture and remembers where it went.

use super::{AudioCapture, PermissionStatus, Recording};
use crate::error::{Result, SkedgeError};
use tracing::{error, info, warn};

/// Recording state of the voice screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoiceState {
    #[default]
    Idle,
    Recording,
}

impl VoiceState {
    pub fn is_recording(&self) -> bool {
        matches!(self, VoiceState::Recording)
    }

    /// Caption shown on the button
    pub fn label(&self) -> &'static str {
        match self {
            VoiceState::Idle => "Tap to Chat",
            VoiceState::Recording => "Listening...",
        }
    }
}

impl std::fmt::Display for VoiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceState::Idle => write!(f, "Idle"),
            VoiceState::Recording => write!(f, "Recording"),
        }
    }
}

/// What a button press did
#[derive(Clone, Debug, PartialEq)]
pub enum VoiceOutcome {
    Started,
    Stopped(Recording),
    /// Microphone access is missing; the UI should ask the user for it
    PermissionRequired,
}

/// Drives an [`AudioCapture`] from button presses
pub struct VoiceSession<C: AudioCapture> {
    capture: C,
    state: VoiceState,
    permission: PermissionStatus,
    last_recording: Option<Recording>,
}

impl<C: AudioCapture> VoiceSession<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            state: VoiceState::Idle,
            permission: PermissionStatus::Undetermined,
            last_recording: None,
        }
    }

    /// Ask for microphone access and remember the answer
    pub fn request_permission(&mut self) -> PermissionStatus {
        self.permission = self.capture.request_permission();
        info!("Microphone permission: {}", self.permission);
        self.permission
    }

    /// Handle a press of the record button
    pub fn toggle(&mut self) -> Result<VoiceOutcome> {
        if self.state.is_recording() {
            self.stop().map(VoiceOutcome::Stopped)
        } else {
            match self.start() {
                Ok(()) => Ok(VoiceOutcome::Started),
                Err(SkedgeError::PermissionDenied(_)) => Ok(VoiceOutcome::PermissionRequired),
                Err(e) => Err(e),
            }
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.state.is_recording() {
            warn!("Already recording, ignoring start request");
            return Ok(());
        }

        if !self.permission.is_granted() {
            warn!("Cannot record: microphone permission is {}", self.permission);
            return Err(SkedgeError::PermissionDenied(format!(
                "microphone permission is {}",
                self.permission
            )));
        }

        self.capture.start().map_err(|e| {
            error!("Failed to start recording: {}", e);
            e
        })?;

        self.state = VoiceState::Recording;
        info!("Recording started");
        Ok(())
    }

    pub fn stop(&mut self) -> Result<Recording> {
        if !self.state.is_recording() {
            return Err(SkedgeError::AudioDeviceError("not recording".to_string()));
        }

        // Back to idle even if storing the capture fails
        self.state = VoiceState::Idle;
        let recording = self.capture.stop().map_err(|e| {
            error!("Failed to stop recording: {}", e);
            e
        })?;

        info!(
            "Recording stopped and stored at {:?} ({:.1}s)",
            recording.path,
            recording.duration().as_secs_f32()
        );
        self.last_recording = Some(recording.clone());
        Ok(recording)
    }

    /// Forward captured audio to storage; call once per frame
    pub fn poll(&mut self) -> usize {
        if self.state.is_recording() {
            self.capture.poll()
        } else {
            0
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    pub fn last_recording(&self) -> Option<&Recording> {
        self.last_recording.as_ref()
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }
}
