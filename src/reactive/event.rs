//! CollectionEvent: represents a mutation of a collection.
//!
//! Published synchronously by `Collection` after each mutating call, so every
//! listener has run by the time the mutating method returns.

use serde::{Deserialize, Serialize};

use crate::model::{Item, ModelRef};

/// The name of a mutation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Add,
    AddAll,
    Remove,
    RemoveAll,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::AddAll => "add_all",
            Self::Remove => "remove",
            Self::RemoveAll => "remove_all",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutation event emitted by a collection.
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// A single model was appended. Carries the wrapped model.
    Add { model: ModelRef },
    /// A batch was appended. Carries the caller's input sequence as given,
    /// not the wrapped models.
    AddAll { items: Vec<Item> },
    /// A single element was removed.
    Remove { item: Item },
    /// A batch removal finished. Carries the resolved input sequence, which is
    /// the pre-removal snapshot when no explicit items were given.
    RemoveAll { items: Vec<Item> },
}

impl CollectionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Add { .. } => EventKind::Add,
            Self::AddAll { .. } => EventKind::AddAll,
            Self::Remove { .. } => EventKind::Remove,
            Self::RemoveAll { .. } => EventKind::RemoveAll,
        }
    }

    /// Elements carried by the event payload, in payload order.
    pub fn items(&self) -> Vec<Item> {
        match self {
            Self::Add { model } => vec![Item::Model(ModelRef::clone(model))],
            Self::Remove { item } => vec![item.clone()],
            Self::AddAll { items } | Self::RemoveAll { items } => items.clone(),
        }
    }
}
