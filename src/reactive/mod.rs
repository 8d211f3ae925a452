//! Reactive layer: synchronous mutation notifications for collections.
//!
//! # Modules
//!
//! - [`event`] - [`CollectionEvent`] enum and its [`EventKind`].
//! - [`event_emitter`] - Generic typed pub/sub ([`EventEmitter<T>`]).

pub mod event;
pub mod event_emitter;

pub use event::{CollectionEvent, EventKind};
pub use event_emitter::{EventEmitter, ListenerId};
