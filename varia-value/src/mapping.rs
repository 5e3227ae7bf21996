use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::mem::{align_of, size_of};
use std::ops::Index;

use itertools::Itertools;
use varia_utils::{hash_unordered, InlineSlot};

use crate::{Value, ValueError, ValueResult};

/// Declared size of the storage backing a [`Mapping`].
///
/// The layout of a `HashMap` does not depend on its key and value types, so `HashMap<usize, usize>` stands in for the
/// real `HashMap<String, Value>`.
pub const MAPPING_SLOT_SIZE: usize = size_of::<HashMap<usize, usize>>();
/// Declared alignment of the storage backing a [`Mapping`].
pub const MAPPING_SLOT_ALIGN: usize = align_of::<HashMap<usize, usize>>();

/// An unordered dictionary from strings to [`Value`]s.
///
/// Keys are unique. Two mappings are equal when they hold the same keys with equal values, no matter in which order
/// they were inserted, and equal mappings always hash the same.
///
/// Lookups come in three flavours:
/// * [`Mapping::at`] fails with [`ValueError::KeyNotFound`] on a missing key.
/// * [`Mapping::get`] gives an [`Option`].
/// * [`Mapping::get_or_insert_default`] inserts [`Value::Null`] for a missing key and hands out a mutable reference to
///   it. Use it for writing, not for looking things up.
///
/// # Example
/// ```
/// use varia_value::{mapping, Value};
///
/// let mut object = mapping! { "a" => 1 };
/// assert!(!object.insert("a", 2));
/// assert_eq!(object.at("a"), Ok(&Value::from(1)));
///
/// *object.get_or_insert_default("a") = Value::from(2);
/// assert_eq!(object["a"], Value::from(2));
/// assert_eq!(object.len(), 1);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Mapping(InlineSlot<HashMap<String, Value>, MAPPING_SLOT_SIZE, MAPPING_SLOT_ALIGN>);

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(InlineSlot::new(HashMap::with_capacity(capacity)))
    }

    /// The backing map.
    #[must_use]
    pub const fn data(&self) -> &HashMap<String, Value> {
        self.0.get()
    }

    /// The backing map, mutably.
    pub fn data_mut(&mut self) -> &mut HashMap<String, Value> {
        self.0.get_mut()
    }

    /// Take out the backing map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0.into_inner()
    }

    /// How many entries are in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Does the mapping have no entries?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Iterate over all entries, in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.data().iter()
    }

    /// Iterate over all entries with mutable values, in no particular order.
    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, String, Value> {
        self.data_mut().iter_mut()
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.data().keys()
    }

    /// Iterate over all values, in no particular order.
    pub fn values(&self) -> hash_map::Values<'_, String, Value> {
        self.data().values()
    }

    /// Iterate over mutable references to all values, in no particular order.
    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, String, Value> {
        self.data_mut().values_mut()
    }

    /// Is `key` in the mapping?
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data().contains_key(key)
    }

    /// Get the value for `key`.
    ///
    /// # Errors
    /// Returns [`ValueError::KeyNotFound`] if there is no such key.
    pub fn at(&self, key: &str) -> ValueResult<&Value> {
        self.data().get(key).ok_or_else(|| ValueError::KeyNotFound(key.to_owned()))
    }

    /// Get the value for `key`, mutably.
    ///
    /// # Errors
    /// Returns [`ValueError::KeyNotFound`] if there is no such key.
    pub fn at_mut(&mut self, key: &str) -> ValueResult<&mut Value> {
        self.data_mut().get_mut(key).ok_or_else(|| ValueError::KeyNotFound(key.to_owned()))
    }

    /// Get the value for `key`, if there is one.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data().get(key)
    }

    /// Get the value for `key` mutably, if there is one.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.data_mut().get_mut(key)
    }

    /// Get a copy of the value for `key`, or [`Value::Null`] if there is none.
    #[must_use]
    pub fn value(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Get the value for `key` mutably, inserting [`Value::Null`] first if the key is missing.
    pub fn get_or_insert_default(&mut self, key: impl Into<String>) -> &mut Value {
        self.data_mut().entry(key.into()).or_default()
    }

    /// Insert `value` under `key`, unless the key is already present.
    ///
    /// Returns whether the insertion happened. An existing value is never replaced, see [`Mapping::set`] for that.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        match self.data_mut().entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
        }
    }

    /// Put `value` under `key`, replacing and returning whatever was there.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data_mut().insert(key.into(), value.into())
    }

    /// Remove `key` and return its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data_mut().remove(key)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.data_mut().clear();
    }
}

impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_unordered(self.iter()));
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .iter()
            .sorted_by(|(k1, _), (k2, _)| k1.cmp(k2))
            .map(|(k, v)| format!("{k:?}: {v}"))
            .join(", ");
        write!(f, "{{{entries}}}")
    }
}

impl Index<&str> for Mapping {
    type Output = Value;

    /// # Panics
    /// If `key` is not in the mapping. Use [`Mapping::at`] for a checked lookup.
    fn index(&self, key: &str) -> &Self::Output {
        &self.data()[key]
    }
}

impl From<HashMap<String, Value>> for Mapping {
    fn from(value: HashMap<String, Value>) -> Self {
        Self(InlineSlot::new(value))
    }
}

impl From<Mapping> for HashMap<String, Value> {
    fn from(value: Mapping) -> Self {
        value.into_inner()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<HashMap<_, _>>(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Mapping {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.data_mut().extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Mapping {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = hash_map::IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
