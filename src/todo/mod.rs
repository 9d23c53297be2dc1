//! Todo list with tap-to-strike, tap-again-to-delete and undo
//!
//! Each item moves `Active -> Struck -> Removed`, driven only by `advance`.
//! Advances are undoable one whole-list state at a time; additions are not.

mod command;
mod controller;
mod gesture;
mod history;
mod item;
mod shared;

pub use command::{AdvanceOutcome, CommandOutcome, NoopReason, TodoCommand, TodoEvent, UndoOutcome};
pub use controller::TodoListController;
pub use gesture::{Gesture, PinchTracker};
pub use history::{History, Snapshot, DEFAULT_HISTORY_LIMIT};
pub use item::{Item, ItemId, ItemState};
pub use shared::SharedTodoList;
