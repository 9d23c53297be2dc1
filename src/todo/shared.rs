//! Thread-safe handle to a todo list controller
//!
//! Every operation takes the same lock, so mutations are serialized and each
//! history snapshot reflects a fully settled prior state.

use super::command::{AdvanceOutcome, CommandOutcome, TodoCommand, TodoEvent, UndoOutcome};
use super::controller::TodoListController;
use super::item::{Item, ItemId};
use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-protected [`TodoListController`]
#[derive(Clone, Default)]
pub struct SharedTodoList {
    inner: Arc<Mutex<TodoListController>>,
}

impl SharedTodoList {
    pub fn new(controller: TodoListController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn add(&self, text: impl Into<String>) -> Option<ItemId> {
        self.inner.lock().add(text)
    }

    pub fn advance(&self, id: ItemId) -> AdvanceOutcome {
        self.inner.lock().advance(id)
    }

    pub fn undo(&self) -> UndoOutcome {
        self.inner.lock().undo()
    }

    pub fn apply(&self, command: TodoCommand) -> CommandOutcome {
        self.inner.lock().apply(command)
    }

    pub fn subscribe(&self) -> Receiver<TodoEvent> {
        self.inner.lock().subscribe()
    }

    /// Owned copy of the items; no lock is held after return
    pub fn current_list(&self) -> Vec<Item> {
        self.inner.lock().current_list()
    }

    pub fn undo_available(&self) -> bool {
        self.inner.lock().undo_available()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run several operations under one lock acquisition
    pub fn with<R>(&self, f: impl FnOnce(&mut TodoListController) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
