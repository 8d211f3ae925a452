//! Item: one element of a collection.
//!
//! Collections normally hold models, but elements passed at construction time
//! and the results of `map` are stored as given, so an element may also be a
//! raw JSON value without a property accessor.

use std::sync::Arc;

use serde_json::{Number, Value};

use super::{same_model, ModelRef, Record};

#[derive(Debug, Clone)]
pub enum Item {
    /// A value satisfying the model contract.
    Model(ModelRef),
    /// A plain value that was never wrapped. Objects and arrays keep their
    /// identity across clones of the `Item`.
    Raw(Arc<Value>),
}

impl Item {
    /// The model, if this element already satisfies the model contract.
    pub fn as_model(&self) -> Option<&ModelRef> {
        match self {
            Self::Model(model) => Some(model),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Model(_) => None,
            Self::Raw(value) => Some(value.as_ref()),
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    /// Read a property through the model accessor. Raw values have none.
    pub fn get(&self, property: &str) -> Option<Value> {
        self.as_model().and_then(|model| model.get(property))
    }

    /// Strict equality.
    ///
    /// Models, raw objects and raw arrays compare by reference. Other raw
    /// values compare by value, with numbers compared numerically so `1` and
    /// `1.0` are the same.
    pub fn same(&self, other: &Item) -> bool {
        match (self, other) {
            (Self::Model(a), Self::Model(b)) => same_model(a, b),
            (Self::Raw(a), Self::Raw(b)) => same_raw(a, b),
            _ => false,
        }
    }
}

fn same_raw(a: &Arc<Value>, b: &Arc<Value>) -> bool {
    match (a.as_ref(), b.as_ref()) {
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_)) => {
            Arc::ptr_eq(a, b)
        }
        (Value::Number(x), Value::Number(y)) => same_number(x, y),
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

fn same_number(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Self::Raw(Arc::new(value))
    }
}

impl From<ModelRef> for Item {
    fn from(model: ModelRef) -> Self {
        Self::Model(model)
    }
}

impl From<&ModelRef> for Item {
    fn from(model: &ModelRef) -> Self {
        Self::Model(ModelRef::clone(model))
    }
}

impl From<Arc<Record>> for Item {
    fn from(record: Arc<Record>) -> Self {
        Self::Model(record)
    }
}

impl From<Record> for Item {
    fn from(record: Record) -> Self {
        Self::Model(Arc::new(record))
    }
}
