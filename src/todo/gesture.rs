//! Translation of user gestures into todo commands
//!
//! Tapping a row advances it, submitting the input field adds an item, and an
//! outward pinch (or the undo button) undoes the last advance.

use super::command::TodoCommand;
use super::item::ItemId;

/// A discrete gesture delivered by the UI
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Text field submitted
    Submit(String),
    /// Row tapped
    Tap(ItemId),
    /// Pinch finished with this cumulative scale factor
    Pinch { scale: f32 },
    /// Undo button pressed
    UndoButton,
}

impl Gesture {
    /// Map this gesture to a command, if it has one
    ///
    /// Only an outward pinch (scale above 1.0) undoes; pinching in does nothing.
    pub fn into_command(self) -> Option<TodoCommand> {
        match self {
            Gesture::Submit(text) => Some(TodoCommand::Add(text)),
            Gesture::Tap(id) => Some(TodoCommand::Advance(id)),
            Gesture::Pinch { scale } if scale > 1.0 => Some(TodoCommand::Undo),
            Gesture::Pinch { .. } => None,
            Gesture::UndoButton => Some(TodoCommand::Undo),
        }
    }
}

/// Accumulates per-frame zoom factors into one pinch gesture
///
/// egui reports multi-touch zoom as a per-frame ratio while fingers are down.
/// The tracker multiplies those ratios and reports a single
/// [`Gesture::Pinch`] when the touch ends, so one pinch yields one undo.
#[derive(Debug, Default)]
pub struct PinchTracker {
    scale: Option<f32>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's zoom ratio, or `None` when no pinch is active
    pub fn update(&mut self, zoom_delta: Option<f32>) -> Option<Gesture> {
        match zoom_delta {
            Some(delta) => {
                let scale = self.scale.get_or_insert(1.0);
                *scale *= delta;
                None
            }
            None => self.scale.take().map(|scale| Gesture::Pinch { scale }),
        }
    }

    pub fn is_active(&self) -> bool {
        self.scale.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_and_submit_map_to_commands() {
        let id = ItemId::new();
        assert_eq!(Gesture::Tap(id).into_command(), Some(TodoCommand::Advance(id)));
        assert_eq!(
            Gesture::Submit("milk".into()).into_command(),
            Some(TodoCommand::Add("milk".into()))
        );
        assert_eq!(Gesture::UndoButton.into_command(), Some(TodoCommand::Undo));
    }

    #[test]
    fn test_only_outward_pinch_undoes() {
        assert_eq!(Gesture::Pinch { scale: 1.4 }.into_command(), Some(TodoCommand::Undo));
        assert_eq!(Gesture::Pinch { scale: 1.0 }.into_command(), None);
        assert_eq!(Gesture::Pinch { scale: 0.6 }.into_command(), None);
    }

    #[test]
    fn test_tracker_reports_once_at_end() {
        let mut tracker = PinchTracker::new();
        assert_eq!(tracker.update(None), None);

        assert_eq!(tracker.update(Some(1.25)), None);
        assert!(tracker.is_active());
        assert_eq!(tracker.update(Some(2.0)), None);

        assert_eq!(tracker.update(None), Some(Gesture::Pinch { scale: 2.5 }));
        assert!(!tracker.is_active());
        assert_eq!(tracker.update(None), None);
    }

    #[test]
    fn test_tracker_inward_pinch() {
        let mut tracker = PinchTracker::new();
        tracker.update(Some(0.5));
        tracker.update(Some(0.5));
        let gesture = tracker.update(None).unwrap();
        assert_eq!(gesture, Gesture::Pinch { scale: 0.25 });
        assert_eq!(gesture.into_command(), None);
    }
}
