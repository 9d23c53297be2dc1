//! Application configuration
//!
//! Loaded from a TOML file; every field has a default so an absent or
//! partial file is fine.

use crate::error::{Result, SkedgeError};
use crate::todo::DEFAULT_HISTORY_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SKEDGE_CONFIG";

/// Longest allowed recording; the capture buffer is allocated for all of it up front
pub const MAX_RECORDING_SECS: u32 = 600;

/// Top-level configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkedgeConfig {
    pub todo: TodoConfig,
    pub voice: VoiceConfig,
    pub reminders: RemindersConfig,
}

/// Todo list settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Maximum number of undo snapshots; 0 disables undo
    pub history_limit: usize,
    /// Items present when the app starts
    pub seed: Vec<String>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            seed: Vec::new(),
        }
    }
}

/// Voice recording settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Directory recordings are written to
    pub recordings_dir: PathBuf,
    /// Longest recording kept; older audio is dropped beyond this
    pub max_recording_secs: u32,
    /// Capacity of the capture and speech event channels
    pub channel_capacity: usize,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        let recordings_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("skedge")
            .join("recordings");
        Self {
            recordings_dir,
            max_recording_secs: 300,
            channel_capacity: 1024,
        }
    }
}

/// Reminder form defaults
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RemindersConfig {
    pub default_hour: u32,
    pub default_minute: u32,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            default_hour: 9,
            default_minute: 0,
        }
    }
}

impl SkedgeConfig {
    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SkedgeError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml(&content).map_err(|e| match e {
            SkedgeError::ConfigError(msg) => {
                SkedgeError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SkedgeConfig =
            toml::from_str(content).map_err(|e| SkedgeError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `$SKEDGE_CONFIG`, then the user config dir, else defaults
    pub fn discover() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(path);
        }

        if let Some(path) = Self::default_path().filter(|p| p.exists()) {
            return Self::load(path);
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// `<config_dir>/skedge/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skedge").join("config.toml"))
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.todo.history_limit = limit;
        self
    }

    pub fn with_recordings_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.voice.recordings_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.voice.max_recording_secs == 0 {
            return Err(SkedgeError::ConfigError(
                "voice.max_recording_secs must be positive".to_string(),
            ));
        }
        if self.voice.max_recording_secs > MAX_RECORDING_SECS {
            return Err(SkedgeError::ConfigError(format!(
                "voice.max_recording_secs must be at most {}",
                MAX_RECORDING_SECS
            )));
        }
        if self.voice.channel_capacity == 0 {
            return Err(SkedgeError::ConfigError(
                "voice.channel_capacity must be positive".to_string(),
            ));
        }
        if self.reminders.default_hour >= 24 || self.reminders.default_minute >= 60 {
            return Err(SkedgeError::ConfigError(format!(
                "reminders default time {:02}:{:02} is not a valid time",
                self.reminders.default_hour, self.reminders.default_minute
            )));
        }
        Ok(())
    }
}
