use serde_json::{Map, Value};

/// A refinement check over a borrowed JSON value.
pub type Predicate<'a> = &'a dyn Fn(&Value) -> bool;

/// True iff the value is an object. In JSON terms `Value::Object` already
/// excludes arrays and null, so this is a shape check on the runtime
/// category, not a plain-object check.
pub fn value_is_non_array_object(value: &Value) -> bool {
    value.is_object()
}

/// True iff the value is an array with at least one element, all of which
/// satisfy `predicate` when one is given.
pub fn is_non_empty_array(value: &Value, predicate: Option<Predicate<'_>>) -> bool {
    match value.as_array() {
        Some(items) => {
            !items.is_empty() && predicate.map_or(true, |check| items.iter().all(check))
        }
        None => false,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True iff `property` is a key on `object`, regardless of its value:
/// `{"foo": null}` has `"foo"`, `{}` does not. Exact-spelling,
/// case-sensitive match.
pub fn property_exists_on_object(object: &Map<String, Value>, property: &str) -> bool {
    object.contains_key(property)
}

/// True iff the value is an object with the named property, whose value
/// satisfies `predicate` when one is given. Without a predicate any property
/// value counts, null included.
pub fn object_has_property(value: &Value, property: &str, predicate: Option<Predicate<'_>>) -> bool {
    match value.as_object().and_then(|object| object.get(property)) {
        Some(found) => predicate.map_or(true, |check| check(found)),
        None => false,
    }
}

/// True iff the value is an object whose named property equals `expects`.
pub fn object_has_property_that_equals(value: &Value, property: &str, expects: &Value) -> bool {
    match value.as_object().and_then(|object| object.get(property)) {
        Some(found) => found == expects,
        None => false,
    }
}

/// True iff the value is an object and every own property value satisfies
/// `predicate`. An object with zero properties vacuously passes for any
/// predicate; callers must not read a `true` as implying non-emptiness.
pub fn object_has_only_properties_that_match_predicate(
    value: &Value,
    predicate: Predicate<'_>,
) -> bool {
    match value.as_object() {
        Some(object) => object.values().all(predicate),
        None => false,
    }
}

/// True iff the value is an object whose named property is itself a
/// non-empty array, with the same optional element predicate as
/// [`is_non_empty_array`].
pub fn object_has_non_empty_array_property(
    value: &Value,
    property: &str,
    predicate: Option<Predicate<'_>>,
) -> bool {
    match value.as_object().and_then(|object| object.get(property)) {
        Some(found) => is_non_empty_array(found, predicate),
        None => false,
    }
}

/// True iff the value is an object holding exactly the named property and no
/// other key, with its value satisfying `predicate` when one is given.
pub fn object_only_has_that_property(
    value: &Value,
    property: &str,
    predicate: Option<Predicate<'_>>,
) -> bool {
    match value.as_object() {
        Some(object) => {
            object.len() == 1
                && match object.get(property) {
                    Some(found) => predicate.map_or(true, |check| check(found)),
                    None => false,
                }
        }
        None => false,
    }
}
