//! Main application struct and eframe integration

use crate::config::SkedgeConfig;
use crate::reminders::{LocalScheduler, NotificationScheduler};
use crate::todo::TodoListController;
use crate::ui::components::{
    ReminderForm, ReminderFormState, TodoScreen, TodoScreenState, VoiceButton, VoiceScreenState,
};
use crate::ui::theme::Theme;
use crate::voice::{AudioCapture, VoiceSession};
use egui::{CentralPanel, RichText, TopBottomPanel};
use tracing::info;

/// Screen currently shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Todo,
    Voice,
    Reminders,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Todo => "Todo",
            Tab::Voice => "Voice",
            Tab::Reminders => "Reminders",
        }
    }
}

/// Main Skedge application
pub struct SkedgeApp {
    pub tab: Tab,
    pub todo: TodoScreenState,
    pub voice: VoiceScreenState<Box<dyn AudioCapture>>,
    pub reminders: ReminderFormState,
    theme: Theme,
}

impl SkedgeApp {
    /// Create the application and apply the theme to the eframe context
    pub fn new(cc: &eframe::CreationContext<'_>, config: SkedgeConfig) -> Self {
        let app = Self::from_config(config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Build every screen from configuration
    pub fn from_config(config: SkedgeConfig) -> Self {
        let controller = TodoListController::with_history_limit(config.todo.history_limit)
            .with_items(config.todo.seed.iter().cloned());
        info!(
            "Todo list ready: {} items, history limit {}",
            controller.len(),
            controller.history_limit()
        );

        Self::with_capture(config, controller, default_capture)
    }

    /// Build the application with a specific audio capture
    pub fn with_capture(
        config: SkedgeConfig,
        controller: TodoListController,
        capture: impl FnOnce(&SkedgeConfig) -> Box<dyn AudioCapture>,
    ) -> Self {
        let voice = VoiceScreenState::new(VoiceSession::new(capture(&config)));
        let reminders = ReminderFormState::new(
            LocalScheduler::new(),
            config.reminders.default_hour,
            config.reminders.default_minute,
        );

        Self {
            tab: Tab::default(),
            todo: TodoScreenState::new(controller),
            voice,
            reminders,
            theme: Theme::default(),
        }
    }

    fn show_tabs(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("tabs")
            .frame(egui::Frame::none().fill(self.theme.bg_secondary).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Skedge")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.add_space(self.theme.spacing);

                    for tab in [Tab::Todo, Tab::Voice, Tab::Reminders] {
                        ui.selectable_value(&mut self.tab, tab, tab.title());
                    }
                });
            });
    }

    /// Deliver due reminders, whichever screen is showing
    pub fn deliver_reminders(&mut self) -> usize {
        let now = self.reminders.scheduler.now();
        let fired = self.reminders.tick(now);
        if fired > 0 {
            info!("Delivered {} reminder(s)", fired);
        }
        fired
    }

    /// Draw the selected screen
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.deliver_reminders();

        match self.tab {
            Tab::Todo => TodoScreen::new(&mut self.todo, &self.theme).show(ui),
            Tab::Voice => {
                ui.vertical_centered(|ui| {
                    VoiceButton::new(&mut self.voice, &self.theme).show(ui);
                });
            }
            Tab::Reminders => ReminderForm::new(&mut self.reminders, &self.theme).show(ui),
        }
    }
}

#[cfg(feature = "audio-io")]
fn default_capture(config: &SkedgeConfig) -> Box<dyn AudioCapture> {
    Box::new(crate::voice::MicrophoneCapture::new(
        &config.voice.recordings_dir,
        config.voice.max_recording_secs,
        config.voice.channel_capacity,
    ))
}

#[cfg(not(feature = "audio-io"))]
fn default_capture(_config: &SkedgeConfig) -> Box<dyn AudioCapture> {
    Box::new(crate::voice::UnavailableCapture)
}

impl eframe::App for SkedgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_tabs(ctx);

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| self.ui(ui));

        // Keep draining the microphone while away from the voice tab
        if self.voice.session.state().is_recording() {
            if self.tab != Tab::Voice {
                self.voice.session.poll();
            }
            ctx.request_repaint();
        } else if !self.reminders.scheduler.pending().is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Skedge shutting down");
    }
}
