use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GuardError, Result};

/// A vector carrying the guarantee that it holds at least one element.
///
/// The checked way in is [`require_non_empty_array`]; `TryFrom<Vec<T>>` and
/// `Deserialize` delegate to it. [`non_empty_keys`] hands out the guarantee
/// on the caller's word alone, see its contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    fn from_vec_unchecked(items: Vec<T>) -> Self {
        Self(items)
    }

    /// First element. Cannot fail while the non-empty invariant holds.
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(items: NonEmpty<T>) -> Self {
        items.0
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = GuardError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        require_non_empty_array(items)
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmpty<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        require_non_empty_array(items).map_err(serde::de::Error::custom)
    }
}

/// Applies `map` to every element, keeping the non-empty guarantee.
///
/// Output length always equals input length, so nothing is re-checked at
/// runtime.
pub fn non_empty_map<T, U, F>(items: &NonEmpty<T>, map: F) -> NonEmpty<U>
where
    F: FnMut(&T) -> U,
{
    NonEmpty::from_vec_unchecked(items.iter().map(map).collect())
}

/// Ordered own key names (insertion order) of an object the caller
/// guarantees has at least one key.
///
/// The guarantee is not verified at runtime. Passing an empty object yields
/// a [`NonEmpty`] with a broken invariant whose [`NonEmpty::first`] panics;
/// when the input is not known to have keys, use [`object_keys`] followed by
/// [`require_non_empty_array`] instead.
pub fn non_empty_keys(object: &Map<String, Value>) -> NonEmpty<String> {
    NonEmpty::from_vec_unchecked(object.keys().cloned().collect())
}

/// Runtime-checked constructor for [`NonEmpty`]. Returns the same elements
/// unchanged and in order, or [`GuardError::EmptyArrayError`].
pub fn require_non_empty_array<T>(items: Vec<T>) -> Result<NonEmpty<T>> {
    if items.is_empty() {
        tracing::debug!("rejecting empty array");
        return Err(GuardError::EmptyArrayError);
    }

    Ok(NonEmpty(items))
}

/// Ordered own key names (insertion order) of any object.
pub fn object_keys(object: &Map<String, Value>) -> Vec<String> {
    object.keys().cloned().collect()
}
