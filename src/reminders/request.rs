use crate::error::{Result, SkedgeError};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier returned when a reminder is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(Uuid);

impl ReminderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A notification to show at a wall-clock hour and minute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRequest {
    pub hour: u32,
    pub minute: u32,
    pub title: String,
    pub body: String,
    /// Fire again every day at the same time
    pub repeats: bool,
}

impl ReminderRequest {
    /// Validate and build a reminder
    ///
    /// # Errors
    /// `InvalidSchedule` if the time is not a valid clock time or the title is blank.
    pub fn new(
        hour: u32,
        minute: u32,
        title: impl Into<String>,
        body: impl Into<String>,
        repeats: bool,
    ) -> Result<Self> {
        if hour >= 24 {
            return Err(SkedgeError::InvalidSchedule(format!(
                "hour must be below 24, got {}",
                hour
            )));
        }
        if minute >= 60 {
            return Err(SkedgeError::InvalidSchedule(format!(
                "minute must be below 60, got {}",
                minute
            )));
        }

        let title = title.into();
        if title.trim().is_empty() {
            return Err(SkedgeError::InvalidSchedule("title is empty".to_string()));
        }

        Ok(Self {
            hour,
            minute,
            title,
            body: body.into(),
            repeats,
        })
    }

    /// A reminder that repeats every day
    pub fn daily(
        hour: u32,
        minute: u32,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self> {
        Self::new(hour, minute, title, body, true)
    }

    pub fn time(&self) -> NaiveTime {
        // Bounds were checked on construction
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// First moment strictly after `now` matching the reminder's time
    pub fn next_fire_after(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.time());
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}
