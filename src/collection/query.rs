//! Non-mutating queries: traversal, filtering, search, aggregate predicates
//! and extraction.
//!
//! Every callback receives `(element, index)`. Queries that produce a
//! collection return a new one with the receiver's configuration; the
//! receiver is never modified and no events are published.

use serde_json::Value;

use crate::{
    error::{CollectionError, Result},
    model::Item,
};

use super::core::Collection;

// ============================================================================
// Traversal
// ============================================================================

impl Collection {
    /// Call `f` for every element in order.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Item, usize),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
        self
    }

    /// A new collection of `f`'s results, in order.
    ///
    /// Results are stored as returned and never wrapped, so mapping to raw
    /// values yields a collection whose elements have no property accessor.
    pub fn map<F, T>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Item, usize) -> T,
        T: Into<Item>,
    {
        let mapped = self
            .iter()
            .enumerate()
            .map(|(index, item)| f(item, index).into())
            .collect();
        self.derive(mapped)
    }
}

// ============================================================================
// Filtering
// ============================================================================

impl Collection {
    /// Elements for which `f` holds, in order.
    pub fn select<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Item, usize) -> bool,
    {
        let selected = self
            .iter()
            .enumerate()
            .filter(|(index, item)| f(*item, *index))
            .map(|(_, item)| item.clone())
            .collect();
        self.derive(selected)
    }

    /// Alias of [`select`](Self::select).
    pub fn r#where<F>(&self, f: F) -> Collection
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.select(f)
    }

    /// Elements for which `f` does not hold, in order.
    pub fn reject<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.select(|item, index| !f(item, index))
    }

    /// First occurrence of each strictly-distinct element, in order.
    pub fn unique(&self) -> Collection {
        let mut seen: Vec<Item> = Vec::with_capacity(self.len());
        for item in self.iter() {
            if !seen.iter().any(|s| s.same(item)) {
                seen.push(item.clone());
            }
        }
        self.derive(seen)
    }
}

// ============================================================================
// Search
// ============================================================================

impl Collection {
    /// The lowest-index element for which `f` holds.
    pub fn find<F>(&self, mut f: F) -> Option<&Item>
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|(index, item)| f(*item, *index))
            .map(|(_, item)| item)
    }

    /// The highest-index element for which `f` holds, scanning from the end.
    pub fn find_last<F>(&self, mut f: F) -> Option<&Item>
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .rev()
            .find(|(index, item)| f(*item, *index))
            .map(|(_, item)| item)
    }

    /// Position of the first element strictly equal to `item`.
    pub fn index_of(&self, item: &Item) -> Option<usize> {
        self.iter().position(|candidate| candidate.same(item))
    }

    pub fn has(&self, item: &Item) -> bool {
        self.index_of(item).is_some()
    }

    /// Alias of [`has`](Self::has).
    pub fn contains(&self, item: &Item) -> bool {
        self.has(item)
    }
}

// ============================================================================
// Aggregate Predicates
// ============================================================================

impl Collection {
    /// True if `f` holds for every element; true when empty.
    pub fn all<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .all(|(index, item)| f(item, index))
    }

    /// Alias of [`all`](Self::all).
    pub fn every<F>(&self, f: F) -> bool
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.all(f)
    }

    /// True if `f` holds for no element; true when empty.
    pub fn none<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.all(|item, index| !f(item, index))
    }

    /// True if `f` holds for at least one element; false when empty.
    pub fn any<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .any(|(index, item)| f(item, index))
    }

    /// Number of elements for which `f` holds.
    pub fn count<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&Item, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|(index, item)| f(*item, *index))
            .count()
    }
}

// ============================================================================
// Extraction
// ============================================================================

impl Collection {
    /// `property` of every element, in order. Absent properties are `Null`.
    ///
    /// Fails with [`CollectionError::NotAModel`] at the first element that is
    /// a raw value.
    pub fn pluck(&self, property: &str) -> Result<Vec<Value>> {
        self.iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_model()
                    .map(|model| model.get(property).unwrap_or(Value::Null))
                    .ok_or(CollectionError::NotAModel { index })
            })
            .collect()
    }
}
