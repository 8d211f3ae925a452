//! Record: the default JSON-backed model wrapper.

use parking_lot::Mutex;
use serde_json::Value;

use super::{CollectionId, Model};

/// A model holding a JSON value.
///
/// Properties resolve with dot-separated paths, so `get("address.city")`
/// walks nested objects. A missing segment or a non-object parent yields
/// `None`.
#[derive(Debug)]
pub struct Record {
    data: Value,
    collection: Mutex<Option<CollectionId>>,
}

impl Record {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            collection: Mutex::new(None),
        }
    }

    /// The wrapped value.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }
}

impl Model for Record {
    fn get(&self, property: &str) -> Option<Value> {
        get_path(&self.data, property).cloned()
    }

    fn collection(&self) -> Option<CollectionId> {
        *self.collection.lock()
    }

    fn set_collection(&self, collection: Option<CollectionId>) {
        *self.collection.lock() = collection;
    }
}

fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}
