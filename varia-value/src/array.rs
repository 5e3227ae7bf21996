use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::mem::{align_of, size_of};
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use varia_utils::{hash_range, InlineSlot};

use crate::{Value, ValueError, ValueResult};

/// Declared size of the storage backing an [`Array`].
///
/// Every `Vec<T>` with a sized `T` has the same layout, so `Vec<usize>` stands in for the real `Vec<Value>`.
pub const ARRAY_SLOT_SIZE: usize = size_of::<Vec<usize>>();
/// Declared alignment of the storage backing an [`Array`].
pub const ARRAY_SLOT_ALIGN: usize = align_of::<Vec<usize>>();

/// An ordered list of [`Value`]s.
///
/// The array owns its elements, copying it copies them all.
///
/// There are two ways to index into an array. [`Array::at`] checks the index and reports [`ValueError::OutOfRange`],
/// `array[i]` trusts the caller and panics when that trust was misplaced.
///
/// # Example
/// ```
/// use varia_value::{array, Array, Value};
///
/// let mut array = array![1, "two"];
/// array.push(3.0);
/// assert_eq!(array.len(), 3);
/// assert_eq!(array[1], Value::from("two"));
/// assert!(array.at(3).is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Array(InlineSlot<Vec<Value>, ARRAY_SLOT_SIZE, ARRAY_SLOT_ALIGN>);

impl Array {
    /// Create an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self(InlineSlot::new(Vec::new()))
    }

    /// Create an empty array with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(InlineSlot::new(Vec::with_capacity(capacity)))
    }

    /// The backing list.
    #[must_use]
    pub const fn data(&self) -> &Vec<Value> {
        self.0.get()
    }

    /// The backing list, mutably.
    pub fn data_mut(&mut self) -> &mut Vec<Value> {
        self.0.get_mut()
    }

    /// Take out the backing list.
    #[must_use]
    pub fn into_inner(self) -> Vec<Value> {
        self.0.into_inner()
    }

    /// How many elements are in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Does the array have no elements?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Iterate over the elements, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data().iter()
    }

    /// Iterate over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.data_mut().iter_mut()
    }

    /// Get the element at `index`.
    ///
    /// # Errors
    /// Returns [`ValueError::OutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> ValueResult<&Value> {
        self.data().get(index).ok_or(ValueError::OutOfRange { index, len: self.len() })
    }

    /// Get the element at `index`, mutably.
    ///
    /// # Errors
    /// Returns [`ValueError::OutOfRange`] if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> ValueResult<&mut Value> {
        let len = self.len();
        self.data_mut().get_mut(index).ok_or(ValueError::OutOfRange { index, len })
    }

    /// Get the element at `index`, if there is one.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.data().get(index)
    }

    /// Get the element at `index` mutably, if there is one.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.data_mut().get_mut(index)
    }

    /// The first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.data().first()
    }

    /// The last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.data().last()
    }

    /// Does the array hold an element equal to `value`?
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.data().contains(value)
    }

    /// Add an element to the end.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.data_mut().push(value.into());
    }

    /// Insert an element before `index`, shifting everything after it back.
    ///
    /// # Panics
    /// If `index > self.len()`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        self.data_mut().insert(index, value.into());
    }

    /// Insert every element of `values` before `index`, keeping their order.
    ///
    /// # Panics
    /// If `index > self.len()`.
    ///
    /// # Example
    /// ```
    /// use varia_value::array;
    ///
    /// let mut array = array![1, 4];
    /// array.insert_range(1, [2, 3]);
    /// assert_eq!(array, array![1, 2, 3, 4]);
    /// ```
    pub fn insert_range<I>(&mut self, index: usize, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        drop(self.data_mut().splice(index..index, values.into_iter().map(Into::into)));
    }

    /// Remove the element at `index` and return it.
    ///
    /// # Errors
    /// Returns [`ValueError::OutOfRange`] if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> ValueResult<Value> {
        let len = self.len();
        if index < len {
            Ok(self.data_mut().remove(index))
        } else {
            Err(ValueError::OutOfRange { index, len })
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.data_mut().clear();
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        self.data()
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        self.data_mut()
    }
}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_range(self.iter()));
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

impl Index<usize> for Array {
    type Output = Value;

    /// # Panics
    /// If `index >= self.len()`. Use [`Array::at`] for a checked lookup.
    fn index(&self, index: usize) -> &Self::Output {
        &self.data()[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data_mut()[index]
    }
}

impl From<Vec<Value>> for Array {
    fn from(value: Vec<Value>) -> Self {
        Self(InlineSlot::new(value))
    }
}

impl From<Array> for Vec<Value> {
    fn from(value: Array) -> Self {
        value.into_inner()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.data_mut().extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
