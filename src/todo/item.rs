use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a todo item
///
/// Assigned once at creation and never reused, so an id restored by undo
/// always refers to the same item it did before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an item sits in its `Active -> Struck -> Removed` lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemState {
    Active,
    Struck,
}

/// A single todo entry
///
/// Items are plain values. The controller replaces an item rather than
/// sharing it, so history snapshots never observe later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub struck: bool,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            struck: false,
        }
    }

    pub fn state(&self) -> ItemState {
        if self.struck {
            ItemState::Struck
        } else {
            ItemState::Active
        }
    }

    /// Copy of this item with the strike-through applied
    pub fn struck(&self) -> Self {
        Self {
            struck: true,
            ..self.clone()
        }
    }
}
