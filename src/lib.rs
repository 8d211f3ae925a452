pub mod error;

pub mod collection;
pub mod model;
pub mod reactive;

pub use collection::{Collection, CollectionBuilder};
pub use error::{CollectionError, Result};
pub use model::{record_factory, CollectionId, Item, Model, ModelFactory, ModelRef, Record};
pub use reactive::{CollectionEvent, EventEmitter, EventKind, ListenerId};
