use anyhow::Result;
use json_guards::{
    non_empty_keys, non_empty_map, object_keys, require_non_empty_array, GuardError, NonEmpty,
};
use serde_json::{json, Value};

#[test]
fn test_non_empty_map() {
    let items = require_non_empty_array(vec![1, 2, 3]).unwrap();
    let mapped = non_empty_map(&items, |item| *item);
    assert_eq!(mapped.len(), 3);
    assert_eq!(mapped.as_slice(), items.as_slice());

    let labels = non_empty_map(&items, |item| format!("item {}", item));
    assert_eq!(labels.len(), items.len());
    assert_eq!(labels.as_slice(), &["item 1", "item 2", "item 3"]);
}

#[test]
fn test_non_empty_keys() {
    let value = json!({"foo": 1, "bar": 1});
    let keys = non_empty_keys(value.as_object().unwrap());
    assert_eq!(keys.as_slice(), &["foo", "bar"]);

    // The non-emptiness of the input is the caller's guarantee, not a
    // runtime check.
    let empty = json!({});
    assert_eq!(non_empty_keys(empty.as_object().unwrap()).len(), 0);
}

#[test]
fn test_require_non_empty_array_rejects_empty() {
    let result = require_non_empty_array(Vec::<Value>::new());
    assert!(matches!(&result, Err(GuardError::EmptyArrayError)));
    assert_eq!(result.unwrap_err().to_string(), "array is empty");
}

#[test]
fn test_require_non_empty_array_returns_input_unchanged() {
    let items = require_non_empty_array(vec!["foo"]).unwrap();
    assert_eq!(items.as_slice(), &["foo"]);

    let items = require_non_empty_array(vec![3, 1, 2]).unwrap();
    assert_eq!(items.into_vec(), vec![3, 1, 2]);
}

#[test]
fn test_object_keys() {
    let value = json!({"foo": 1, "bar": 2, "baz": 3});
    assert_eq!(
        object_keys(value.as_object().unwrap()),
        vec!["foo", "bar", "baz"]
    );

    let empty = json!({});
    assert!(object_keys(empty.as_object().unwrap()).is_empty());
}

#[test]
fn test_non_empty_try_from() {
    let items = NonEmpty::try_from(vec![1]).unwrap();
    assert_eq!(*items.first(), 1);
    assert!(NonEmpty::<i32>::try_from(Vec::new()).is_err());

    let back: Vec<i32> = items.into();
    assert_eq!(back, vec![1]);
}

#[test]
fn test_non_empty_round_trips_as_json_array() -> Result<()> {
    let items: NonEmpty<String> = serde_json::from_str(r#"["foo", "bar"]"#)?;
    assert_eq!(items.len(), 2);
    assert_eq!(serde_json::to_value(&items)?, json!(["foo", "bar"]));

    let empty: std::result::Result<NonEmpty<String>, _> = serde_json::from_str("[]");
    assert!(empty.is_err());

    Ok(())
}
