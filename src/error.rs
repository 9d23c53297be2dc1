//! Error types for Skedge
//!
//! Only the platform-facing layers (audio, speech, reminders, config) can fail.
//! Todo list operations never produce an error; their no-op outcomes are
//! reported as values instead (see [`crate::todo::NoopReason`]).

use thiserror::Error;

/// Skedge application errors
#[derive(Error, Debug, Clone)]
pub enum SkedgeError {
    /// Audio device initialization or operation error
    #[error("Audio device error: {0}")]
    AudioDeviceError(String),

    /// Microphone access has not been granted
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Speech recognition error
    #[error("Speech recognition error: {0}")]
    SpeechError(String),

    /// Reminder time or content is invalid
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Notification authorization or registration error
    #[error("Notification error: {0}")]
    NotificationError(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for SkedgeError {
    fn from(e: std::io::Error) -> Self {
        SkedgeError::IOError(e.to_string())
    }
}

impl SkedgeError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the screen usable; the user can simply retry.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Hardware/device errors may require user intervention
            SkedgeError::AudioDeviceError(_) => false,
            // The user has to change system settings
            SkedgeError::PermissionDenied(_) => false,
            SkedgeError::SpeechError(_) => true,
            // Fix the input and try again
            SkedgeError::InvalidSchedule(_) => true,
            SkedgeError::NotificationError(_) => true,
            SkedgeError::IOError(_) => false,
            SkedgeError::ConfigError(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    ///
    /// Returns a message suitable for an alert in the UI.
    pub fn user_message(&self) -> String {
        match self {
            SkedgeError::AudioDeviceError(_) => {
                "Audio device error. Please check your microphone.".to_string()
            }
            SkedgeError::PermissionDenied(_) => {
                "Permission required. Please grant microphone access.".to_string()
            }
            SkedgeError::SpeechError(_) => {
                "Speech recognition failed. Please try again.".to_string()
            }
            SkedgeError::InvalidSchedule(reason) => format!("Invalid reminder: {}", reason),
            SkedgeError::NotificationError(_) => {
                "Could not schedule the notification. Please allow notifications.".to_string()
            }
            SkedgeError::IOError(_) => "File system error occurred.".to_string(),
            SkedgeError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

/// Result type alias for Skedge operations
pub type Result<T> = std::result::Result<T, SkedgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.wav");
        let err: SkedgeError = io.into();
        assert!(matches!(err, SkedgeError::IOError(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_permission_message() {
        let err = SkedgeError::PermissionDenied("microphone".to_string());
        assert!(err.user_message().starts_with("Permission required"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_schedule_message_includes_reason() {
        let err = SkedgeError::InvalidSchedule("hour must be below 24".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Invalid reminder: hour must be below 24");
        assert_eq!(err.to_string(), "Invalid schedule: hour must be below 24");
    }
}
