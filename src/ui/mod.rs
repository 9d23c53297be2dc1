//! egui/eframe user interface

mod app;
pub mod components;
mod theme;

pub use app::{SkedgeApp, Tab};
pub use components::{ReminderForm, TodoScreen, VoiceButton};
pub use theme::Theme;
