//! Collection: an observable ordered sequence of models.
//!
//! # Modules
//!
//! - [`builder`] - [`CollectionBuilder`] configuration.
//! - [`core`] - [`Collection`] construction, accessors, mutation and
//!   subscriptions.
//! - [`query`] - traversal, filtering, search, aggregates and `pluck`.

pub mod builder;
pub mod core;
pub mod query;

pub use self::builder::CollectionBuilder;
pub use self::core::Collection;
