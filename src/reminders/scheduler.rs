//! Local reminder scheduling
//!
//! [`NotificationScheduler`] is the capability the UI talks to.
//! [`LocalScheduler`] keeps registrations in process and reports which ones
//! are due when polled with the current time.

use super::request::{ReminderId, ReminderRequest};
use crate::error::{Result, SkedgeError};
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// A registered reminder and when it fires next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    pub id: ReminderId,
    pub request: ReminderRequest,
    pub next_fire: NaiveDateTime,
}

/// Schedule local notifications
pub trait NotificationScheduler {
    /// Ask the user to allow notifications; returns whether they did
    fn request_authorization(&mut self) -> Result<bool>;

    /// Register a reminder; fire-and-forget apart from the returned id
    fn schedule(&mut self, request: ReminderRequest) -> Result<ReminderId>;

    /// Remove a reminder; returns false if it was not registered
    fn cancel(&mut self, id: ReminderId) -> bool;

    fn pending(&self) -> Vec<ScheduledReminder>;
}

/// In-process scheduler driven by a clock supplied by the caller
pub struct LocalScheduler {
    authorized: bool,
    grant_on_request: bool,
    reminders: Vec<ScheduledReminder>,
    clock: Box<dyn Fn() -> NaiveDateTime + Send>,
}

impl LocalScheduler {
    /// Scheduler using the local wall clock
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Local::now().naive_local())
    }

    pub fn with_clock(clock: impl Fn() -> NaiveDateTime + Send + 'static) -> Self {
        Self {
            authorized: false,
            grant_on_request: true,
            reminders: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Make authorization requests get refused, as when the user says no
    pub fn refusing(mut self) -> Self {
        self.grant_on_request = false;
        self
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Current time according to this scheduler's clock
    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Take the reminders due at `now`
    ///
    /// Repeating reminders are re-armed for their next occurrence, one-shot
    /// reminders are dropped.
    pub fn fire_due(&mut self, now: NaiveDateTime) -> Vec<ScheduledReminder> {
        let mut fired = Vec::new();
        self.reminders.retain_mut(|reminder| {
            if reminder.next_fire > now {
                return true;
            }
            fired.push(reminder.clone());
            if reminder.request.repeats {
                reminder.next_fire = reminder.request.next_fire_after(now);
                true
            } else {
                false
            }
        });

        for reminder in &fired {
            info!("Reminder due: {} ({})", reminder.request.title, reminder.id);
        }
        fired
    }

    /// Time of the soonest pending reminder
    pub fn next_due(&self) -> Option<NaiveDateTime> {
        self.reminders.iter().map(|r| r.next_fire).min()
    }
}

impl Default for LocalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationScheduler for LocalScheduler {
    fn request_authorization(&mut self) -> Result<bool> {
        self.authorized = self.grant_on_request;
        info!("Notification authorization: {}", self.authorized);
        Ok(self.authorized)
    }

    fn schedule(&mut self, request: ReminderRequest) -> Result<ReminderId> {
        if !self.authorized {
            return Err(SkedgeError::NotificationError(
                "notifications are not authorized".to_string(),
            ));
        }

        let id = ReminderId::new();
        let next_fire = request.next_fire_after(self.now());
        debug!(
            "Scheduled reminder {} at {:02}:{:02} (repeats: {}), next {}",
            id, request.hour, request.minute, request.repeats, next_fire
        );
        self.reminders.push(ScheduledReminder {
            id,
            request,
            next_fire,
        });
        Ok(id)
    }

    fn cancel(&mut self, id: ReminderId) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        before != self.reminders.len()
    }

    fn pending(&self) -> Vec<ScheduledReminder> {
        let mut pending = self.reminders.clone();
        pending.sort_by_key(|r| r.next_fire);
        pending
    }
}
