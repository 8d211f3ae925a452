//! Model wrapper contract and element types.
//!
//! A collection owns its models through [`ModelRef`] handles. Each model
//! records which collection currently holds it via a [`CollectionId`]
//! back-reference, a plain lookup value that never keeps anything alive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod item;
pub mod record;

pub use item::Item;
pub use record::Record;

// ============================================================================
// Collection Identity
// ============================================================================

static NEXT_COLLECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a collection, used as a model's back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionId(u64);

impl CollectionId {
    pub(crate) fn next() -> Self {
        Self(NEXT_COLLECTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "collection#{}", self.0)
    }
}

// ============================================================================
// Model Contract
// ============================================================================

/// Capabilities a collection requires of a wrapped domain record.
///
/// The back-reference slot uses interior mutability because models are shared
/// through [`ModelRef`] handles; only the owning collection writes to it.
pub trait Model: std::fmt::Debug + Send + Sync {
    /// Read a property. `None` when the property is absent.
    fn get(&self, property: &str) -> Option<Value>;

    /// The collection currently holding this model, if any.
    fn collection(&self) -> Option<CollectionId>;

    fn set_collection(&self, collection: Option<CollectionId>);
}

/// Shared handle to a model. Identity is pointer identity of the allocation.
pub type ModelRef = Arc<dyn Model>;

/// Builds a model from a raw value; the collection's configured wrapper type.
pub type ModelFactory = Arc<dyn Fn(Value) -> ModelRef + Send + Sync>;

/// The default wrapper: every raw value becomes a [`Record`].
pub fn record_factory() -> ModelFactory {
    Arc::new(|value| Arc::new(Record::new(value)) as ModelRef)
}

/// Reference equality of two model handles.
pub fn same_model(a: &ModelRef, b: &ModelRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
