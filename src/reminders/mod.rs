//! Daily reminder notifications

mod request;
mod scheduler;

pub use request::{ReminderId, ReminderRequest};
pub use scheduler::{LocalScheduler, NotificationScheduler, ScheduledReminder};
