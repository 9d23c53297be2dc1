//! Reminders screen: schedule a notification at a time of day

use crate::reminders::{
    LocalScheduler, NotificationScheduler, ReminderId, ReminderRequest, ScheduledReminder,
};
use crate::ui::theme::Theme;
use chrono::NaiveDateTime;
use egui::RichText;
use tracing::{info, warn};

/// Maximum delivered reminders kept on screen
const DELIVERED_SHOWN: usize = 5;

/// State owned by the reminders screen between frames
pub struct ReminderFormState {
    pub scheduler: LocalScheduler,
    pub hour: u32,
    pub minute: u32,
    pub title: String,
    pub body: String,
    pub repeats: bool,
    pub notice: Option<String>,
    /// Most recent deliveries, newest first
    pub delivered: Vec<ScheduledReminder>,
}

impl ReminderFormState {
    /// Create the form and ask for notification permission
    pub fn new(mut scheduler: LocalScheduler, default_hour: u32, default_minute: u32) -> Self {
        let notice = match scheduler.request_authorization() {
            Ok(true) => None,
            Ok(false) => Some("Notifications are not allowed.".to_string()),
            Err(e) => {
                warn!("Notification authorization failed: {}", e);
                Some(e.user_message())
            }
        };

        Self {
            scheduler,
            hour: default_hour,
            minute: default_minute,
            title: String::new(),
            body: String::new(),
            repeats: true,
            notice,
            delivered: Vec::new(),
        }
    }

    /// Validate the form and register the reminder
    pub fn submit(&mut self) -> Option<ReminderId> {
        let result = ReminderRequest::new(
            self.hour,
            self.minute,
            self.title.clone(),
            self.body.clone(),
            self.repeats,
        )
        .and_then(|request| self.scheduler.schedule(request));

        match result {
            Ok(id) => {
                info!("Reminder {} scheduled for {:02}:{:02}", id, self.hour, self.minute);
                self.notice = Some(format!("Reminder set for {:02}:{:02}", self.hour, self.minute));
                self.title.clear();
                self.body.clear();
                Some(id)
            }
            Err(e) => {
                self.notice = Some(e.user_message());
                None
            }
        }
    }

    /// Deliver reminders that are due at `now`
    pub fn tick(&mut self, now: NaiveDateTime) -> usize {
        let fired = self.scheduler.fire_due(now);
        let count = fired.len();
        for reminder in fired {
            self.delivered.insert(0, reminder);
        }
        self.delivered.truncate(DELIVERED_SHOWN);
        count
    }
}

/// Reminders screen component
pub struct ReminderForm<'a> {
    state: &'a mut ReminderFormState,
    theme: &'a Theme,
}

impl<'a> ReminderForm<'a> {
    pub fn new(state: &'a mut ReminderFormState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let state = self.state;

        for reminder in &state.delivered {
            ui.label(
                RichText::new(format!("🔔 {} {}", reminder.request.title, reminder.request.body))
                    .strong(),
            );
        }

        egui::Grid::new("reminder_form")
            .num_columns(2)
            .spacing([self.theme.spacing, self.theme.spacing_sm])
            .show(ui, |ui| {
                ui.label("Time");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut state.hour).range(0..=23).suffix(" h"));
                    ui.add(egui::DragValue::new(&mut state.minute).range(0..=59).suffix(" min"));
                });
                ui.end_row();

                ui.label("Title");
                ui.text_edit_singleline(&mut state.title);
                ui.end_row();

                ui.label("Message");
                ui.text_edit_singleline(&mut state.body);
                ui.end_row();

                ui.label("Every day");
                ui.checkbox(&mut state.repeats, "");
                ui.end_row();
            });

        if ui.button("Schedule").clicked() {
            state.submit();
        }

        if let Some(notice) = &state.notice {
            ui.label(RichText::new(notice).color(self.theme.text_muted));
        }

        ui.separator();

        let mut cancelled = None;
        for reminder in state.scheduler.pending() {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{:02}:{:02}  {}{}",
                    reminder.request.hour,
                    reminder.request.minute,
                    reminder.request.title,
                    if reminder.request.repeats { " (daily)" } else { "" }
                ));
                if ui.small_button("✕").on_hover_text("Cancel").clicked() {
                    cancelled = Some(reminder.id);
                }
            });
        }
        if let Some(id) = cancelled {
            state.scheduler.cancel(id);
        }
    }
}
