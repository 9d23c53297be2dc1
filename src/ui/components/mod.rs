//! Screens of the Skedge application

pub mod reminder_form;
pub mod todo_screen;
pub mod voice_button;

pub use reminder_form::{ReminderForm, ReminderFormState};
pub use todo_screen::{item_label, TodoScreen, TodoScreenState};
pub use voice_button::{pulse_scale, VoiceButton, VoiceScreenState};
