use thiserror::Error;

// ---------------------------------------------------------------------------
// CollectionError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An element was asked for a property but is a raw value, not a model.
    #[error("Element at index {index} is not a model and has no property accessor")]
    NotAModel { index: usize },
}

/// Convenience alias: the default error type is `CollectionError`.
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
