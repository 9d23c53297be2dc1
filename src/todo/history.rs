//! Bounded undo history of whole-list snapshots
//!
//! Snapshots are pushed before every advancing mutation and popped by undo,
//! last in first out. When the configured limit is reached the oldest
//! snapshot is evicted to make room.

use super::item::Item;
use std::collections::VecDeque;
use tracing::debug;

/// Default number of snapshots kept for undo
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Immutable copy of the ordered item sequence at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    items: Vec<Item>,
}

impl Snapshot {
    pub fn capture(items: &[Item]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the snapshot, yielding a list the caller fully owns
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

/// LIFO stack of snapshots with oldest-first eviction
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create a history that keeps at most `limit` snapshots
    ///
    /// A limit of zero stores nothing, which disables undo.
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        if self.limit == 0 {
            return;
        }

        while self.snapshots.len() >= self.limit {
            self.snapshots.pop_front();
            debug!("History full ({}), evicted oldest snapshot", self.limit);
        }

        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
