//! Collection: construction, accessors, mutation and subscriptions.
//!
//! Mutations publish a [`CollectionEvent`] synchronously: every listener has
//! returned before the mutating method does.

use std::sync::Arc;

use crate::{
    model::{CollectionId, Item, ModelFactory, ModelRef},
    reactive::{CollectionEvent, EventEmitter, EventKind, ListenerId},
};

use super::builder::CollectionBuilder;

/// An observable, ordered sequence of models.
pub struct Collection {
    id: CollectionId,
    name: Option<String>,
    models: Vec<Item>,
    wrapper: ModelFactory,
    emitter: EventEmitter<CollectionEvent>,
}

// ============================================================================
// Construction
// ============================================================================

impl Collection {
    /// An empty collection wrapping raw input as [`Record`](crate::Record)s.
    pub fn new() -> Self {
        CollectionBuilder::new().build()
    }

    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    /// A collection holding `models` as given (raw values are not wrapped).
    pub fn from_models<I>(models: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        CollectionBuilder::new().models(models).build()
    }

    pub(crate) fn from_parts(
        name: Option<String>,
        wrapper: ModelFactory,
        models: Vec<Item>,
    ) -> Self {
        Self {
            id: CollectionId::next(),
            name,
            models,
            wrapper,
            emitter: EventEmitter::new(),
        }
    }

    /// A new collection with the same configuration holding `models`.
    /// Gets its own id and emitter; back-references are left untouched.
    pub(crate) fn derive(&self, models: Vec<Item>) -> Self {
        Self::from_parts(self.name.clone(), ModelFactory::clone(&self.wrapper), models)
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Collection {
    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// The current elements in order.
    pub fn models(&self) -> &[Item] {
        &self.models
    }

    pub fn at(&self, index: usize) -> Option<&Item> {
        self.models.get(index)
    }

    pub fn first(&self) -> Option<&Item> {
        self.models.first()
    }

    pub fn last(&self) -> Option<&Item> {
        self.models.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.models.iter()
    }

    pub fn into_models(self) -> Vec<Item> {
        self.models
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a crate::model::Item;
    type IntoIter = std::slice::Iter<'a, crate::model::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

// ============================================================================
// Mutation
// ============================================================================

impl Collection {
    /// Append one element, wrapping it first if it is not already a model.
    ///
    /// Sets the model's back-reference to this collection and publishes
    /// [`CollectionEvent::Add`] with the wrapped model.
    pub fn add(&mut self, item: impl Into<Item>) -> &mut Self {
        let model = self.wrap(item.into());
        model.set_collection(Some(self.id));
        self.models.push(Item::Model(ModelRef::clone(&model)));

        tracing::debug!(
            collection = %self.id,
            name = ?self.name,
            len = self.models.len(),
            "model added"
        );
        self.emitter.emit(&CollectionEvent::Add { model });
        self
    }

    /// [`add`](Self::add) each element in order, then publish a single
    /// [`CollectionEvent::AddAll`] carrying the input as given.
    pub fn add_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        for item in &items {
            self.add(item.clone());
        }

        tracing::debug!(
            collection = %self.id,
            name = ?self.name,
            added = items.len(),
            len = self.models.len(),
            "models added"
        );
        self.emitter.emit(&CollectionEvent::AddAll { items });
        self
    }

    /// Remove the first element strictly equal to `item`.
    ///
    /// Clears the removed model's back-reference and publishes
    /// [`CollectionEvent::Remove`]. Absent elements are a silent no-op.
    pub fn remove(&mut self, item: &Item) -> &mut Self {
        let Some(index) = self.index_of(item) else {
            tracing::trace!(
                collection = %self.id,
                name = ?self.name,
                "remove: element not present"
            );
            return self;
        };

        if let Item::Model(model) = &self.models[index] {
            model.set_collection(None);
        }
        let removed = self.models.remove(index);

        tracing::debug!(
            collection = %self.id,
            name = ?self.name,
            index,
            len = self.models.len(),
            "model removed"
        );
        self.emitter.emit(&CollectionEvent::Remove { item: removed });
        self
    }

    /// [`remove`](Self::remove) each of `items` in order, then publish a single
    /// [`CollectionEvent::RemoveAll`] carrying the resolved input.
    ///
    /// With `None`, removes a snapshot of the current elements taken before
    /// the first removal.
    pub fn remove_all(&mut self, items: Option<Vec<Item>>) -> &mut Self {
        let items = items.unwrap_or_else(|| self.models.clone());
        for item in &items {
            self.remove(item);
        }

        tracing::debug!(
            collection = %self.id,
            name = ?self.name,
            requested = items.len(),
            len = self.models.len(),
            "models removed"
        );
        self.emitter.emit(&CollectionEvent::RemoveAll { items });
        self
    }

    /// Shorthand for `remove_all(None)`.
    pub fn clear(&mut self) -> &mut Self {
        self.remove_all(None)
    }

    fn wrap(&self, item: Item) -> ModelRef {
        match item {
            Item::Model(model) => model,
            Item::Raw(value) => (self.wrapper)(Arc::unwrap_or_clone(value)),
        }
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

impl Collection {
    /// Listen to every mutation event.
    pub fn on(&self, callback: impl Fn(&CollectionEvent) + Send + Sync + 'static) -> ListenerId {
        self.emitter.on(callback)
    }

    /// Listen to events of one kind only.
    pub fn on_kind(
        &self,
        kind: EventKind,
        callback: impl Fn(&CollectionEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.emitter.on(move |event| {
            if event.kind() == kind {
                callback(event);
            }
        })
    }

    /// Listen to the next mutation event only.
    pub fn once(&self, callback: impl Fn(&CollectionEvent) + Send + Sync + 'static) -> ListenerId {
        self.emitter.once(callback)
    }

    pub fn off(&self, id: ListenerId) {
        self.emitter.off(id);
    }

    /// The embedded event channel.
    pub fn events(&self) -> &EventEmitter<CollectionEvent> {
        &self.emitter
    }
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("models", &self.models)
            .field("emitter", &self.emitter)
            .finish()
    }
}
