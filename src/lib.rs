//! Skedge: a todo list with undo, a voice recorder and daily reminders

pub mod config;
pub mod error;
pub mod reminders;
pub mod todo;
pub mod ui;
pub mod voice;

pub use config::SkedgeConfig;
pub use error::{Result, SkedgeError};
pub use todo::{
    AdvanceOutcome, CommandOutcome, Item, ItemId, SharedTodoList, TodoCommand, TodoEvent,
    TodoListController, UndoOutcome,
};
