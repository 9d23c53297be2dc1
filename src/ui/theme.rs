//! Colors and styling for the Skedge UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent for buttons and the record circle
    pub primary: Color32,
    pub error: Color32,

    pub bg_primary: Color32,
    pub bg_secondary: Color32,

    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Text on top of the record circle
    pub text_on_primary: Color32,

    /// Opacity multiplier for struck items
    pub struck_opacity: f32,

    pub button_rounding: Rounding,
    pub spacing: f32,
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// White background with a near-black accent, as on the phone app
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(17, 17, 17),
            error: Color32::from_rgb(220, 38, 38),

            bg_primary: Color32::WHITE,
            bg_secondary: Color32::from_rgb(243, 244, 246),

            text_primary: Color32::BLACK,
            text_muted: Color32::from_rgb(107, 114, 128),
            text_on_primary: Color32::WHITE,

            struck_opacity: 0.5,

            button_rounding: Rounding::same(8.0),
            spacing: 16.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);
        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(16.0, FontFamily::Proportional),
        );
        ctx.set_style(style);
    }

    /// Text color for an item row
    pub fn item_color(&self, struck: bool) -> Color32 {
        if struck {
            self.text_primary.gamma_multiply(self.struck_opacity)
        } else {
            self.text_primary
        }
    }
}
