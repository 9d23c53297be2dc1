//! Todo list controller with snapshot-based undo
//!
//! Every `advance` snapshots the whole list before mutating it, and `undo`
//! pops one snapshot back. Adding an item does not snapshot, so additions are
//! not undoable on their own: an undo after an add restores the list as it was
//! before the previous advance, dropping the new item along with it.

use super::command::{
    AdvanceOutcome, CommandOutcome, NoopReason, TodoCommand, TodoEvent, UndoOutcome,
};
use super::history::{History, Snapshot, DEFAULT_HISTORY_LIMIT};
use super::item::{Item, ItemId};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::{debug, info};

/// Capacity of each subscriber channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Owns the current todo list and its undo history
#[derive(Debug)]
pub struct TodoListController {
    items: Vec<Item>,
    history: History,
    subscribers: Vec<Sender<TodoEvent>>,
}

impl Default for TodoListController {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListController {
    /// Create an empty list with the default history limit
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty list keeping at most `limit` undo snapshots
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            history: History::new(limit),
            subscribers: Vec::new(),
        }
    }

    /// Pre-seed the list, in order, skipping blank entries
    pub fn with_items<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for text in texts {
            let text = text.into();
            if !text.trim().is_empty() {
                self.items.push(Item::new(text));
            }
        }
        info!("Todo list seeded with {} item(s)", self.items.len());
        self
    }

    /// Receive a [`TodoEvent`] for every subsequent operation
    pub fn subscribe(&mut self) -> Receiver<TodoEvent> {
        let (tx, rx) = bounded(EVENT_CHANNEL_CAPACITY);
        self.subscribers.push(tx);
        rx
    }

    /// Append a new active item
    ///
    /// Returns `None` without touching the list when `text` is blank.
    /// No history snapshot is pushed.
    pub fn add(&mut self, text: impl Into<String>) -> Option<ItemId> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("Ignoring add: {}", NoopReason::EmptyText);
            self.emit(TodoEvent::Ignored(NoopReason::EmptyText));
            return None;
        }

        let item = Item::new(text);
        let id = item.id;
        debug!("Added item {} ({:?})", id, item.text);
        self.items.push(item.clone());
        self.emit(TodoEvent::Added(item));
        Some(id)
    }

    /// Strike the item, or remove it if it is already struck
    ///
    /// The full list is snapshotted onto the history first, so the change can
    /// be undone. Unknown ids leave both list and history untouched.
    pub fn advance(&mut self, id: ItemId) -> AdvanceOutcome {
        let Some(index) = self.position(id) else {
            debug!("Ignoring advance of {}: {}", id, NoopReason::UnknownItem);
            self.emit(TodoEvent::Ignored(NoopReason::UnknownItem));
            return AdvanceOutcome::NotFound;
        };

        self.history.push(Snapshot::capture(&self.items));

        if self.items[index].struck {
            self.items.remove(index);
            debug!("Removed item {} (history: {})", id, self.history.len());
            self.emit(TodoEvent::Removed(id));
            AdvanceOutcome::Removed(id)
        } else {
            self.items[index] = self.items[index].struck();
            debug!("Struck item {} (history: {})", id, self.history.len());
            self.emit(TodoEvent::Struck(id));
            AdvanceOutcome::Struck(id)
        }
    }

    /// Restore the list as it was before the most recent advance
    pub fn undo(&mut self) -> UndoOutcome {
        match self.history.pop() {
            Some(snapshot) => {
                self.items = snapshot.into_items();
                debug!(
                    "Undo restored {} item(s), {} snapshot(s) left",
                    self.items.len(),
                    self.history.len()
                );
                self.emit(TodoEvent::Restored {
                    len: self.items.len(),
                });
                UndoOutcome::Restored
            }
            None => {
                debug!("Ignoring undo: {}", NoopReason::EmptyHistory);
                self.emit(TodoEvent::Ignored(NoopReason::EmptyHistory));
                UndoOutcome::NothingToUndo
            }
        }
    }

    /// Dispatch a command to the matching operation
    pub fn apply(&mut self, command: TodoCommand) -> CommandOutcome {
        match command {
            TodoCommand::Add(text) => CommandOutcome::Added(self.add(text)),
            TodoCommand::Advance(id) => CommandOutcome::Advanced(self.advance(id)),
            TodoCommand::Undo => CommandOutcome::Undone(self.undo()),
        }
    }

    /// Owned copy of the items in display order
    pub fn current_list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Borrowed, read-only view of the items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn undo_available(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_limit(&self) -> usize {
        self.history.limit()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn emit(&mut self, event: TodoEvent) {
        self.subscribers.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("Todo event channel full, dropping event");
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(controller: &TodoListController) -> Vec<(String, bool)> {
        controller
            .current_list()
            .into_iter()
            .map(|item| (item.text, item.struck))
            .collect()
    }

    #[test]
    fn test_add_appends_active_item() {
        let mut controller = TodoListController::new();
        let id = controller.add("buy milk").expect("item added");

        let list = controller.current_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, id);
        assert_eq!(list[0].text, "buy milk");
        assert!(!list[0].struck);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut controller = TodoListController::new();
        controller.add("first");
        controller.add("second");
        controller.add("third");

        assert_eq!(
            texts(&controller),
            vec![
                ("first".to_string(), false),
                ("second".to_string(), false),
                ("third".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        let mut controller = TodoListController::new();
        assert!(controller.add("").is_none());
        assert!(controller.add("   \t\n").is_none());
        assert!(controller.is_empty());
        assert!(!controller.undo_available());
    }

    #[test]
    fn test_add_does_not_push_history() {
        let mut controller = TodoListController::new();
        controller.add("a");
        controller.add("b");
        assert_eq!(controller.history_len(), 0);
        assert!(!controller.undo_available());
    }

    #[test]
    fn test_advance_strikes_then_removes() {
        let mut controller = TodoListController::new();
        let id = controller.add("walk dog").unwrap();

        assert_eq!(controller.advance(id), AdvanceOutcome::Struck(id));
        assert!(controller.item(id).unwrap().struck);
        assert_eq!(controller.len(), 1);

        assert_eq!(controller.advance(id), AdvanceOutcome::Removed(id));
        assert!(controller.item(id).is_none());
        assert!(controller.is_empty());
        assert_eq!(controller.history_len(), 2);
    }

    #[test]
    fn test_advance_unknown_id_is_noop() {
        let mut controller = TodoListController::new();
        controller.add("a");
        let before = controller.current_list();

        assert_eq!(controller.advance(ItemId::new()), AdvanceOutcome::NotFound);
        assert_eq!(controller.current_list(), before);
        assert!(!controller.undo_available());
    }

    #[test]
    fn test_advance_removed_id_is_noop() {
        let mut controller = TodoListController::new();
        let id = controller.add("a").unwrap();
        controller.advance(id);
        controller.advance(id);

        assert_eq!(controller.advance(id), AdvanceOutcome::NotFound);
        assert_eq!(controller.history_len(), 2);
    }

    #[test]
    fn test_undo_restores_prior_state() {
        let mut controller = TodoListController::new();
        let a = controller.add("a").unwrap();
        controller.add("b");
        let before = controller.current_list();

        controller.advance(a);
        assert_eq!(controller.undo(), UndoOutcome::Restored);
        assert_eq!(controller.current_list(), before);
    }

    #[test]
    fn test_undo_restores_removed_item_in_place() {
        let mut controller = TodoListController::new();
        controller.add("a");
        let b = controller.add("b").unwrap();
        controller.add("c");

        controller.advance(b);
        controller.advance(b);
        assert_eq!(controller.len(), 2);

        controller.undo();
        assert_eq!(
            texts(&controller),
            vec![
                ("a".to_string(), false),
                ("b".to_string(), true),
                ("c".to_string(), false),
            ]
        );
        // The restored item keeps its id and can be advanced again
        assert_eq!(controller.advance(b), AdvanceOutcome::Removed(b));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut controller = TodoListController::new().with_items(["a", "b"]);
        let before = controller.current_list();

        assert_eq!(controller.undo(), UndoOutcome::NothingToUndo);
        assert_eq!(controller.current_list(), before);
    }

    #[test]
    fn test_undo_after_add_reverts_to_previous_advance() {
        let mut controller = TodoListController::new();
        let a = controller.add("a").unwrap();
        controller.advance(a);
        controller.add("b");

        assert_eq!(controller.undo(), UndoOutcome::Restored);
        // State before advance(a): only "a", active. "b" goes with it.
        assert_eq!(texts(&controller), vec![("a".to_string(), false)]);
    }

    #[test]
    fn test_restored_list_does_not_alias_history() {
        let mut controller = TodoListController::new();
        let a = controller.add("a").unwrap();
        controller.advance(a); // snapshot [a]
        controller.advance(a); // snapshot [a*]

        controller.undo(); // list [a*]
        controller.advance(a); // removes a, snapshot [a*]
        controller.undo(); // list [a*]
        controller.undo(); // list [a]

        assert_eq!(texts(&controller), vec![("a".to_string(), false)]);
    }

    #[test]
    fn test_history_limit_bounds_undo_depth() {
        let mut controller = TodoListController::with_history_limit(2);
        let ids: Vec<ItemId> = (0..3)
            .map(|n| controller.add(format!("item {n}")).unwrap())
            .collect();
        for id in &ids {
            controller.advance(*id);
        }

        assert_eq!(controller.history_len(), 2);
        assert!(controller.undo().is_restored());
        assert!(controller.undo().is_restored());
        assert_eq!(controller.undo(), UndoOutcome::NothingToUndo);
        // Oldest snapshot was evicted, so item 0 stays struck
        let list = controller.current_list();
        assert!(list[0].struck);
        assert!(!list[1].struck);
        assert!(!list[2].struck);
    }

    #[test]
    fn test_current_list_is_a_copy() {
        let mut controller = TodoListController::new();
        controller.add("a");

        let mut copy = controller.current_list();
        copy[0].struck = true;
        copy.clear();

        assert_eq!(controller.len(), 1);
        assert!(!controller.items()[0].struck);
    }

    #[test]
    fn test_with_items_skips_blank_entries() {
        let controller = TodoListController::new().with_items(["a", " ", "b"]);
        assert_eq!(controller.len(), 2);
        assert!(!controller.undo_available());
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut controller = TodoListController::new();
        let CommandOutcome::Added(Some(id)) = controller.apply(TodoCommand::Add("a".into())) else {
            panic!("add should succeed");
        };
        assert_eq!(
            controller.apply(TodoCommand::Advance(id)),
            CommandOutcome::Advanced(AdvanceOutcome::Struck(id))
        );
        assert_eq!(
            controller.apply(TodoCommand::Undo),
            CommandOutcome::Undone(UndoOutcome::Restored)
        );
        assert_eq!(
            controller.apply(TodoCommand::Undo),
            CommandOutcome::Undone(UndoOutcome::NothingToUndo)
        );
    }

    #[test]
    fn test_events_are_emitted() {
        let mut controller = TodoListController::new();
        let events = controller.subscribe();

        let id = controller.add("a").unwrap();
        controller.add("");
        controller.advance(id);
        controller.advance(id);
        controller.undo();
        controller.undo();
        controller.undo();

        let received: Vec<TodoEvent> = events.try_iter().collect();
        assert_eq!(received.len(), 7);
        assert!(matches!(&received[0], TodoEvent::Added(item) if item.id == id));
        assert_eq!(received[1], TodoEvent::Ignored(NoopReason::EmptyText));
        assert_eq!(received[2], TodoEvent::Struck(id));
        assert_eq!(received[3], TodoEvent::Removed(id));
        assert_eq!(received[4], TodoEvent::Restored { len: 1 });
        assert_eq!(received[5], TodoEvent::Restored { len: 1 });
        assert_eq!(received[6], TodoEvent::Ignored(NoopReason::EmptyHistory));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut controller = TodoListController::new();
        let events = controller.subscribe();
        drop(events);

        // Must not panic or fail the operation
        assert!(controller.add("a").is_some());
        assert!(controller.subscribers.is_empty());
    }
}
