//! Voice screen: one large "Tap to Chat" circle
//!
//! The circle pulses while recording. Pressing it toggles the
//! [`VoiceSession`]; failures and missing permission become an alert line
//! under the button.

use crate::voice::{AudioCapture, VoiceOutcome, VoiceSession};
use crate::ui::theme::Theme;
use egui::{Align2, FontId, Rect, RichText, Sense, Vec2};
use tracing::{error, info};

/// Diameter of the circle at rest
const CIRCLE_SIZE: f32 = 300.0;
/// Largest scale reached by the pulse
const PULSE_SCALE: f32 = 1.15;
/// Seconds for one grow-and-shrink cycle
const PULSE_PERIOD: f64 = 1.0;

/// State owned by the voice screen between frames
pub struct VoiceScreenState<C: AudioCapture> {
    pub session: VoiceSession<C>,
    /// Alert text shown under the button
    pub notice: Option<String>,
}

impl<C: AudioCapture> VoiceScreenState<C> {
    /// Wrap a session, asking for microphone access up front
    pub fn new(mut session: VoiceSession<C>) -> Self {
        session.request_permission();
        Self {
            session,
            notice: None,
        }
    }

    /// Handle a press of the circle
    pub fn press(&mut self) {
        self.notice = match self.session.toggle() {
            Ok(VoiceOutcome::Started) => None,
            Ok(VoiceOutcome::Stopped(recording)) => {
                info!("Recording stored at {:?}", recording.path);
                Some(format!("Saved {}", recording.path.display()))
            }
            Ok(VoiceOutcome::PermissionRequired) => {
                Some("Permission required. Please grant microphone access.".to_string())
            }
            Err(e) => {
                error!("Voice button failed: {}", e);
                Some(e.user_message())
            }
        };
    }
}

/// Scale of the circle `t` seconds into the animation
pub fn pulse_scale(t: f64) -> f32 {
    let phase = (t / PULSE_PERIOD).fract() as f32;
    // Triangle wave: up for the first half, down for the second
    let ramp = if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 };
    1.0 + (PULSE_SCALE - 1.0) * ramp
}

/// The "Tap to Chat" button
pub struct VoiceButton<'a, C: AudioCapture> {
    state: &'a mut VoiceScreenState<C>,
    theme: &'a Theme,
}

impl<'a, C: AudioCapture> VoiceButton<'a, C> {
    pub fn new(state: &'a mut VoiceScreenState<C>, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        self.state.session.poll();
        let voice_state = self.state.session.state();

        let size = Vec2::splat(CIRCLE_SIZE * PULSE_SCALE);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let label = voice_state.label();
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label)
        });

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, voice_state.is_recording());
        }

        if response.clicked() {
            self.state.press();
        }

        if let Some(notice) = &self.state.notice {
            ui.add_space(self.theme.spacing);
            ui.label(RichText::new(notice).color(self.theme.error));
        }

        response
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, is_recording: bool) {
        let painter = ui.painter();
        let scale = if is_recording {
            ui.ctx().request_repaint();
            pulse_scale(ui.ctx().input(|i| i.time))
        } else {
            1.0
        };

        // Drop shadow
        painter.circle_filled(
            rect.center() + Vec2::new(0.0, 8.0),
            CIRCLE_SIZE / 2.0 * scale,
            self.theme.primary.gamma_multiply(0.3),
        );
        painter.circle_filled(rect.center(), CIRCLE_SIZE / 2.0 * scale, self.theme.primary);

        let label = if is_recording { "Listening..." } else { "Tap to Chat" };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(28.0),
            self.theme.text_on_primary,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::voice::{PermissionStatus, Recording, UnavailableCapture};
    use std::path::PathBuf;

    struct OkCapture(bool);

    impl AudioCapture for OkCapture {
        fn request_permission(&mut self) -> PermissionStatus {
            PermissionStatus::Granted
        }

        fn start(&mut self) -> Result<()> {
            self.0 = true;
            Ok(())
        }

        fn stop(&mut self) -> Result<Recording> {
            self.0 = false;
            Ok(Recording {
                path: PathBuf::from("/tmp/take.wav"),
                sample_rate: 16000,
                samples: 0,
            })
        }

        fn is_capturing(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_pulse_scale_range() {
        assert!((pulse_scale(0.0) - 1.0).abs() < 1e-6);
        assert!((pulse_scale(0.5) - PULSE_SCALE).abs() < 1e-6);
        assert!((pulse_scale(1.0) - 1.0).abs() < 1e-6);
        for step in 0..100 {
            let s = pulse_scale(step as f64 * 0.037);
            assert!((1.0..=PULSE_SCALE + 1e-6).contains(&s));
        }
    }

    #[test]
    fn test_press_without_microphone_shows_alert() {
        let mut state = VoiceScreenState::new(VoiceSession::new(UnavailableCapture));
        state.press();
        assert_eq!(
            state.notice.as_deref(),
            Some("Permission required. Please grant microphone access.")
        );
    }

    #[test]
    fn test_press_toggles_recording() {
        let mut state = VoiceScreenState::new(VoiceSession::new(OkCapture(false)));
        state.press();
        assert!(state.session.state().is_recording());
        assert!(state.notice.is_none());

        state.press();
        assert!(!state.session.state().is_recording());
        assert_eq!(state.notice.as_deref(), Some("Saved /tmp/take.wav"));
    }
}
