use std::collections::HashMap;
use std::fmt::Display;

use ordered_float::OrderedFloat;

use crate::{Array, Mapping, Payload, ValueError, ValueResult};

#[derive(Debug, Eq, PartialEq, Hash, Clone, Default)]
/// A dynamically typed value.
///
/// Exactly one variant is held at a time. The declaration order of the variants is their discriminant (see
/// [`ValueType`]) and is part of how values hash and compare, so it must not change.
///
/// Copying a `Value` copies the entire tree below it. Nothing is shared between two values.
///
/// # Example
/// ```
/// use varia_value::{Value, ValueType};
///
/// let mut value = Value::from(42);
/// assert_eq!(value.type_of(), ValueType::Int);
/// assert_eq!(value.value(0), 42);
/// assert_eq!(value.value(String::from("fallback")), "fallback");
/// assert!(value.get::<String>().is_err());
///
/// value.clear();
/// assert!(value.is_null());
/// ```
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// A bool.
    Bool(bool),
    /// A signed whole number.
    Int(i32),
    /// An unsigned whole number.
    UInt(u32),
    /// A float.
    ///
    /// Stored as an [`OrderedFloat`] so that every float, `NaN` included, is equal to itself.
    Float(OrderedFloat<f64>),
    /// A string.
    String(String),
    /// A list of strings.
    StringList(Vec<String>),
    /// A list of values.
    Array(Array),
    /// A dictionary of values.
    Mapping(Mapping),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(u8)]
/// The discriminant of a [`Value`].
pub enum ValueType {
    /// See [`Value::Null`].
    Null = 0,
    /// See [`Value::Bool`].
    Bool = 1,
    /// See [`Value::Int`].
    Int = 2,
    /// See [`Value::UInt`].
    UInt = 3,
    /// See [`Value::Float`].
    Float = 4,
    /// See [`Value::String`].
    String = 5,
    /// See [`Value::StringList`].
    StringList = 6,
    /// See [`Value::Array`].
    Array = 7,
    /// See [`Value::Mapping`].
    Mapping = 8,
}

impl ValueType {
    /// The ordinal of this type.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// A human readable name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Float => "Float",
            Self::String => "String",
            Self::StringList => "StringList",
            Self::Array => "Array",
            Self::Mapping => "Mapping",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Which variant is currently held.
    #[must_use]
    pub const fn type_of(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::UInt(_) => ValueType::UInt,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::StringList(_) => ValueType::StringList,
            Self::Array(_) => ValueType::Array,
            Self::Mapping(_) => ValueType::Mapping,
        }
    }

    /// Is this [`Value::Null`]?
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Reset to [`Value::Null`], dropping whatever was held.
    pub fn clear(&mut self) {
        *self = Self::Null;
    }

    /// Move the held value out, leaving [`Value::Null`] behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Get a copy of the payload if it is a `T`, or `default` otherwise.
    ///
    /// This never fails. In particular, numbers are not converted: asking an [`Value::Int`] for an `f64` gives
    /// `default`.
    ///
    /// # Example
    /// ```
    /// use varia_value::Value;
    ///
    /// let value = Value::from(42);
    /// assert_eq!(value.value(0), 42);
    /// assert_eq!(value.value(0.5), 0.5);
    /// ```
    #[must_use]
    pub fn value<T: Payload + Clone>(&self, default: T) -> T {
        self.get_if::<T>().cloned().unwrap_or(default)
    }

    /// Same as [`Value::value`], with `T::default()` as the fallback.
    #[must_use]
    pub fn value_or_default<T: Payload + Clone + Default>(&self) -> T {
        self.get_if::<T>().cloned().unwrap_or_default()
    }

    /// Borrow the payload if it is a `T`.
    #[must_use]
    pub fn get_if<T: Payload>(&self) -> Option<&T> {
        T::peek(self)
    }

    /// Mutably borrow the payload if it is a `T`.
    pub fn get_if_mut<T: Payload>(&mut self) -> Option<&mut T> {
        T::peek_mut(self)
    }

    /// Borrow the payload, which must be a `T`.
    ///
    /// # Errors
    /// Returns [`ValueError::TypeMismatch`] if the value holds anything other than a `T`.
    pub fn get<T: Payload>(&self) -> ValueResult<&T> {
        T::peek(self).ok_or_else(|| self.mismatch::<T>())
    }

    /// Mutably borrow the payload, which must be a `T`.
    ///
    /// This is how nested containers are edited in place.
    ///
    /// # Errors
    /// Returns [`ValueError::TypeMismatch`] if the value holds anything other than a `T`.
    ///
    /// # Example
    /// ```
    /// use varia_value::{array, mapping, Array};
    ///
    /// let mut object = mapping! { "b" => array![1, 2] };
    /// object.at_mut("b")?.get_mut::<Array>()?.push(3);
    /// assert_eq!(object.at("b")?.get::<Array>()?.len(), 3);
    /// # Ok::<(), varia_value::ValueError>(())
    /// ```
    pub fn get_mut<T: Payload>(&mut self) -> ValueResult<&mut T> {
        let found = self.type_of();
        T::peek_mut(self).ok_or(ValueError::TypeMismatch { expected: T::TYPE, found })
    }

    /// Consume the value and return its payload, which must be a `T`.
    ///
    /// # Errors
    /// Returns [`ValueError::TypeMismatch`] if the value holds anything other than a `T`.
    pub fn into_payload<T: Payload>(self) -> ValueResult<T> {
        T::extract(self).map_err(|other| other.mismatch::<T>())
    }

    const fn mismatch<T: Payload>(&self) -> ValueError {
        ValueError::TypeMismatch { expected: T::TYPE, found: self.type_of() }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::StringList(v) => write!(f, "{v:?}"),
            Self::Array(v) => v.fmt(f),
            Self::Mapping(v) => v.fmt(f),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<OrderedFloat<f64>> for Value {
    fn from(value: OrderedFloat<f64>) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value.into())
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<HashMap<String, Self>> for Value {
    fn from(value: HashMap<String, Self>) -> Self {
        Self::Mapping(value.into())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
