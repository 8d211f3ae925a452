//! Tests for the default `Record` wrapper.

use model_collection::{Collection, Model, Record};
use serde_json::json;

// ============================================================================
// get
// ============================================================================

#[test]
fn get_top_level_property() {
    let r = Record::new(json!({ "name": "x", "age": 3 }));
    assert_eq!(r.get("name"), Some(json!("x")));
    assert_eq!(r.get("age"), Some(json!(3)));
}

#[test]
fn get_missing_property_is_none() {
    let r = Record::new(json!({ "name": "x" }));
    assert_eq!(r.get("email"), None);
}

#[test]
fn get_nested_path() {
    let r = Record::new(json!({ "a": { "b": { "c": true } } }));
    assert_eq!(r.get("a.b.c"), Some(json!(true)));
    assert_eq!(r.get("a.b"), Some(json!({ "c": true })));
    assert_eq!(r.get("a.x.c"), None);
}

#[test]
fn get_through_non_object_is_none() {
    let r = Record::new(json!({ "a": 5 }));
    assert_eq!(r.get("a.b"), None);
    assert_eq!(Record::new(json!(5)).get("a"), None);
}

#[test]
fn get_returns_null_values_as_present() {
    let r = Record::new(json!({ "a": null }));
    assert_eq!(r.get("a"), Some(json!(null)));
}

// ============================================================================
// Data access
// ============================================================================

#[test]
fn data_round_trips() {
    let r = Record::new(json!({ "name": "x" }));
    assert_eq!(r.data(), &json!({ "name": "x" }));
    assert_eq!(r.into_data(), json!({ "name": "x" }));
}

// ============================================================================
// Back-reference slot
// ============================================================================

#[test]
fn back_reference_starts_empty() {
    assert_eq!(Record::new(json!({})).collection(), None);
}

#[test]
fn back_reference_can_be_set_and_cleared() {
    let c = Collection::new();
    let r = Record::new(json!({}));

    r.set_collection(Some(c.id()));
    assert_eq!(r.collection(), Some(c.id()));

    r.set_collection(None);
    assert_eq!(r.collection(), None);
}
