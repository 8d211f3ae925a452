//! Tests for each / map.

use std::sync::Arc;

use model_collection::{Collection, CollectionError, Item, ModelRef, Record};
use serde_json::{json, Value};

use super::support::{num, numbers, record, record_events};

// ============================================================================
// each
// ============================================================================

#[test]
fn each_visits_elements_in_order_with_indices() {
    let c = Collection::from_models(numbers(&[5, 3, 9, 1]));
    let mut visited = Vec::new();

    c.each(|item, index| visited.push((index, num(item))));

    assert_eq!(visited, vec![(0, 5), (1, 3), (2, 9), (3, 1)]);
}

#[test]
fn each_returns_the_receiver() {
    let c = Collection::from_models(numbers(&[1]));
    let returned = c.each(|_, _| {});
    assert!(std::ptr::eq(returned, &c));
}

#[test]
fn each_on_empty_collection_never_calls_back() {
    let c = Collection::new();
    let mut calls = 0;
    c.each(|_, _| calls += 1);
    assert_eq!(calls, 0);
}

// ============================================================================
// map
// ============================================================================

#[test]
fn map_builds_a_new_collection_and_leaves_the_receiver_alone() {
    let c = Collection::from_models(numbers(&[1, 2, 3]));
    let log = record_events(&c);

    let doubled = c.map(|item, _| json!(num(item) * 2));

    assert_eq!(doubled.models(), numbers(&[2, 4, 6]).as_slice());
    assert_eq!(c.models(), numbers(&[1, 2, 3]).as_slice());
    assert_ne!(doubled.id(), c.id());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn map_passes_indices() {
    let c = Collection::from_models(numbers(&[7, 7, 7]));
    let indices = c.map(|_, index| json!(index));
    assert_eq!(indices.models(), numbers(&[0, 1, 2]).as_slice());
}

#[test]
fn map_results_are_not_rewrapped() {
    let mut c = Collection::new();
    c.add(json!({ "name": "x" })).add(json!({ "name": "y" }));

    let names = c.map(|item, _| item.get("name").unwrap_or(Value::Null));

    assert!(names.iter().all(|item| !item.is_model()));
    // Plucking from a mapped collection of raw values fails on the first one.
    assert_eq!(
        names.pluck("name"),
        Err(CollectionError::NotAModel { index: 0 })
    );
}

#[test]
fn map_can_return_models() {
    let c = Collection::from_models(numbers(&[1, 2]));

    let wrapped = c.map(|item, _| {
        Arc::new(Record::new(json!({ "value": num(item) }))) as ModelRef
    });

    assert!(wrapped.iter().all(Item::is_model));
    assert_eq!(wrapped.pluck("value").unwrap(), vec![json!(1), json!(2)]);
}

#[test]
fn map_preserves_model_identity_when_returning_the_element() {
    let a = record(json!({ "name": "a" }));
    let c = Collection::from_models(vec![a.clone()]);

    let same = c.map(|item, _| item.clone());

    assert_eq!(same.first(), Some(&a));
}
