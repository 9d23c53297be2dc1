//! Todo list screen
//!
//! Input row on top, one tappable row per item below. Tapping strikes an item,
//! tapping a struck item deletes it, and an outward pinch, the Undo button or
//! Ctrl/Cmd+Z brings back the previous state.

use crate::todo::{CommandOutcome, Gesture, Item, PinchTracker, TodoListController, UndoOutcome};
use crate::ui::theme::Theme;
use egui::{Key, Modifiers, RichText};
use tracing::debug;

/// State owned by the todo screen between frames
pub struct TodoScreenState {
    pub controller: TodoListController,
    /// Contents of the "Add new todo" field
    pub input_text: String,
    /// Transient feedback such as "Nothing to undo"
    pub notice: Option<String>,
    pinch: PinchTracker,
}

impl TodoScreenState {
    pub fn new(controller: TodoListController) -> Self {
        Self {
            controller,
            input_text: String::new(),
            notice: None,
            pinch: PinchTracker::new(),
        }
    }

    /// Apply a gesture and update the on-screen feedback
    pub fn handle(&mut self, gesture: Gesture) -> Option<CommandOutcome> {
        let is_submit = matches!(gesture, Gesture::Submit(_));
        let command = gesture.into_command()?;
        let outcome = self.controller.apply(command);
        debug!("Gesture outcome: {:?}", outcome);

        self.notice = match outcome {
            CommandOutcome::Undone(UndoOutcome::NothingToUndo) => {
                Some("Nothing to undo".to_string())
            }
            _ => None,
        };
        if is_submit && outcome.changed() {
            self.input_text.clear();
        }
        Some(outcome)
    }
}

impl Default for TodoScreenState {
    fn default() -> Self {
        Self::new(TodoListController::new())
    }
}

/// Accessibility label for an item row
pub fn item_label(item: &Item) -> String {
    if item.struck {
        format!("Todo (done): {}", item.text)
    } else {
        format!("Todo: {}", item.text)
    }
}

/// Map the undo keyboard shortcut to a gesture
pub fn undo_shortcut(pressed: bool, text_has_focus: bool) -> Option<Gesture> {
    (pressed && !text_has_focus).then_some(Gesture::UndoButton)
}

/// Todo screen component
pub struct TodoScreen<'a> {
    state: &'a mut TodoScreenState,
    theme: &'a Theme,
}

impl<'a> TodoScreen<'a> {
    pub fn new(state: &'a mut TodoScreenState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let mut gestures = Vec::new();

        self.show_input_row(ui, &mut gestures);
        ui.add_space(self.theme.spacing_sm);
        self.show_items(ui, &mut gestures);
        ui.add_space(self.theme.spacing);
        self.show_undo_row(ui, &mut gestures);

        // Pinch anywhere on the screen
        let zoom = ui.input(|i| i.multi_touch().map(|touch| touch.zoom_delta));
        if let Some(pinch) = self.state.pinch.update(zoom) {
            gestures.push(pinch);
        }

        // A focused text field keeps Cmd+Z for its own edit history
        let text_has_focus = ui.ctx().wants_keyboard_input();
        let undo_pressed =
            !text_has_focus && ui.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z));
        gestures.extend(undo_shortcut(undo_pressed, text_has_focus));

        for gesture in gestures {
            self.state.handle(gesture);
        }
    }

    fn show_input_row(&mut self, ui: &mut egui::Ui, gestures: &mut Vec<Gesture>) {
        ui.horizontal(|ui| {
            let text_edit = egui::TextEdit::singleline(&mut self.state.input_text)
                .hint_text("Add new todo")
                .desired_width(240.0)
                .id(egui::Id::new("todo_input"));

            let text_response = ui.add(text_edit);
            text_response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "New todo")
            });
            let submitted =
                text_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let add_response =
                ui.add(egui::Button::new("➡").rounding(self.theme.button_rounding));
            add_response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Add todo")
            });

            if submitted || add_response.clicked() {
                gestures.push(Gesture::Submit(self.state.input_text.clone()));
            }
        });
    }

    fn show_items(&self, ui: &mut egui::Ui, gestures: &mut Vec<Gesture>) {
        if self.state.controller.is_empty() {
            ui.label(
                RichText::new("Nothing to do")
                    .italics()
                    .color(self.theme.text_muted),
            );
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("todo_items")
            .show(ui, |ui| {
                for item in self.state.controller.items() {
                    let mut text =
                        RichText::new(&item.text).color(self.theme.item_color(item.struck));
                    if item.struck {
                        text = text.strikethrough();
                    }

                    let response = ui.add(egui::Button::new(text).frame(false));
                    let label = item_label(item);
                    response.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &label)
                    });

                    if response.clicked() {
                        gestures.push(Gesture::Tap(item.id));
                    }
                }
            });
    }

    fn show_undo_row(&self, ui: &mut egui::Ui, gestures: &mut Vec<Gesture>) {
        ui.horizontal(|ui| {
            let enabled = self.state.controller.undo_available();
            let response = ui.add_enabled(enabled, egui::Button::new("Undo"));
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, "Undo")
            });
            if response.clicked() {
                gestures.push(Gesture::UndoButton);
            }

            if let Some(notice) = &self.state.notice {
                ui.label(RichText::new(notice).small().color(self.theme.text_muted));
            }
        });
    }
}
