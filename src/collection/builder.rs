//! Collection builder: configures name, wrapper type and initial elements.

use std::sync::Arc;

use serde_json::Value;

use crate::model::{record_factory, Item, Model, ModelFactory, ModelRef};

use super::core::Collection;

/// Fluent configuration for a [`Collection`].
///
/// ```
/// use model_collection::{Collection, Record};
/// use serde_json::json;
///
/// let users = Collection::builder()
///     .name("users")
///     .wrap_with(Record::new)
///     .models(vec![json!({ "name": "seed" })])
///     .build();
/// assert_eq!(users.len(), 1);
/// ```
#[derive(Default)]
pub struct CollectionBuilder {
    name: Option<String>,
    wrapper: Option<ModelFactory>,
    models: Vec<Item>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label used in log output and `Debug`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Wrapper used by `add`/`add_all` for elements that are not yet models.
    pub fn wrapper(mut self, factory: ModelFactory) -> Self {
        self.wrapper = Some(factory);
        self
    }

    /// Like [`wrapper`](Self::wrapper), from a plain constructor.
    pub fn wrap_with<M, F>(self, wrap: F) -> Self
    where
        M: Model + 'static,
        F: Fn(Value) -> M + Send + Sync + 'static,
    {
        self.wrapper(Arc::new(move |value| Arc::new(wrap(value)) as ModelRef))
    }

    /// Initial elements. Stored as given: raw values are not wrapped and no
    /// back-references are set.
    pub fn models<I>(mut self, models: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Collection {
        Collection::from_parts(
            self.name,
            self.wrapper.unwrap_or_else(record_factory),
            self.models,
        )
    }
}

impl std::fmt::Debug for CollectionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionBuilder")
            .field("name", &self.name)
            .field("wrapper", &self.wrapper.as_ref().map(|_| "<fn>"))
            .field("models", &self.models.len())
            .finish()
    }
}
