//! Commands accepted by the todo list and the outcomes/events it produces
//!
//! The design separates:
//! - **Commands**: requests to change the list (from gestures or tests)
//! - **Outcomes**: the synchronous result returned to the caller
//! - **Events**: notifications for observers such as the UI

use super::item::{Item, ItemId};
use std::fmt;

/// Requests that mutate the todo list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoCommand {
    /// Append a new item with this text
    Add(String),
    /// Strike the item, or remove it if already struck
    Advance(ItemId),
    /// Restore the list as it was before the last advance
    Undo,
}

/// Why an operation left the list untouched
///
/// These are expected outcomes of an interactive UI, not failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoopReason {
    /// `add` received empty or whitespace-only text
    EmptyText,
    /// `advance` targeted an id that is not in the current list
    UnknownItem,
    /// `undo` was called with no snapshot to restore
    EmptyHistory,
}

impl NoopReason {
    /// Validation no-ops come from bad input; the other kind from empty history
    pub fn is_validation(&self) -> bool {
        matches!(self, NoopReason::EmptyText | NoopReason::UnknownItem)
    }
}

impl fmt::Display for NoopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoopReason::EmptyText => write!(f, "empty text"),
            NoopReason::UnknownItem => write!(f, "unknown item"),
            NoopReason::EmptyHistory => write!(f, "nothing to undo"),
        }
    }
}

/// Result of advancing an item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Item moved from Active to Struck and stays in the list
    Struck(ItemId),
    /// Item was already struck and has been removed from the list
    Removed(ItemId),
    /// No item with that id; nothing changed
    NotFound,
}

impl AdvanceOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, AdvanceOutcome::NotFound)
    }
}

/// Result of an undo request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A snapshot was popped and is now the current list
    Restored,
    /// History was empty; nothing changed
    NothingToUndo,
}

impl UndoOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, UndoOutcome::Restored)
    }
}

/// Result of [`TodoCommand`] dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Option<ItemId>),
    Advanced(AdvanceOutcome),
    Undone(UndoOutcome),
}

impl CommandOutcome {
    /// Whether the command changed the list
    pub fn changed(&self) -> bool {
        match self {
            CommandOutcome::Added(id) => id.is_some(),
            CommandOutcome::Advanced(outcome) => outcome.is_applied(),
            CommandOutcome::Undone(outcome) => outcome.is_restored(),
        }
    }
}

/// Notifications emitted after every todo operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoEvent {
    Added(Item),
    Struck(ItemId),
    Removed(ItemId),
    /// Undo restored a list of this many items
    Restored { len: usize },
    Ignored(NoopReason),
}
