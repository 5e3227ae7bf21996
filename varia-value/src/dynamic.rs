//! Conversions between [`Value`] and the host application's [`Dynamic`].
//!
//! Going from a [`Value`] to a [`Dynamic`] always works. Going the other way fails with
//! [`ValueError::UnsupportedType`] for the kinds a [`Value`] can not represent (64 bit integers, characters and raw
//! bytes). Both kinds of host map ([`Dynamic::Map`] and [`Dynamic::Hash`]) become a [`Mapping`], and a [`Mapping`]
//! always goes back out as a [`Dynamic::Hash`].
use std::collections::HashMap;

use varia_dynamic::Dynamic;

use crate::{Array, Mapping, Value, ValueError, ValueResult};

impl Value {
    /// Convert into the host's dynamic value, recursively converting containers.
    ///
    /// # Example
    /// ```
    /// use varia_dynamic::Dynamic;
    /// use varia_value::{array, Value};
    ///
    /// let value = Value::from(array![1, "a"]);
    /// assert_eq!(value.to_dynamic(), Dynamic::List(vec![Dynamic::Int(1), Dynamic::from("a")]));
    /// ```
    #[must_use]
    pub fn to_dynamic(&self) -> Dynamic {
        match self {
            Self::Null => Dynamic::Null,
            Self::Bool(b) => Dynamic::Bool(*b),
            Self::Int(i) => Dynamic::Int(*i),
            Self::UInt(u) => Dynamic::UInt(*u),
            Self::Float(f) => Dynamic::Double(f.into_inner()),
            Self::String(s) => Dynamic::String(s.clone()),
            Self::StringList(l) => Dynamic::StringList(l.clone()),
            Self::Array(a) => Dynamic::List(a.iter().map(Self::to_dynamic).collect()),
            Self::Mapping(m) => Dynamic::Hash(m.iter().map(|(k, v)| (k.clone(), v.to_dynamic())).collect()),
        }
    }

    /// Build a value out of the host's dynamic value, recursively converting containers.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedType`] with the host's name for the offending kind if `dynamic`, or anything
    /// nested in it, has no [`Value`] counterpart.
    ///
    /// # Example
    /// ```
    /// use varia_dynamic::Dynamic;
    /// use varia_value::{Value, ValueError};
    ///
    /// assert_eq!(Value::from_dynamic(&Dynamic::UInt(15)), Ok(Value::from(15_u32)));
    /// assert_eq!(
    ///     Value::from_dynamic(&Dynamic::LongLong(15)),
    ///     Err(ValueError::UnsupportedType { type_name: "qlonglong" })
    /// );
    /// ```
    pub fn from_dynamic(dynamic: &Dynamic) -> ValueResult<Self> {
        Ok(match dynamic {
            Dynamic::Null => Self::Null,
            Dynamic::Bool(b) => Self::Bool(*b),
            Dynamic::Int(i) => Self::Int(*i),
            Dynamic::UInt(u) => Self::UInt(*u),
            Dynamic::Double(f) => Self::from(*f),
            Dynamic::String(s) => Self::String(s.clone()),
            Dynamic::StringList(l) => Self::StringList(l.clone()),
            Dynamic::List(list) => {
                log::trace!("Converting {} with {} elements", dynamic.type_name(), list.len());
                Self::Array(list.iter().map(Self::from_dynamic).collect::<ValueResult<Array>>()?)
            }
            Dynamic::Map(map) => {
                log::trace!("Converting {} with {} entries", dynamic.type_name(), map.len());
                Self::Mapping(mapping_from_entries(map)?)
            }
            Dynamic::Hash(map) => {
                log::trace!("Converting {} with {} entries", dynamic.type_name(), map.len());
                Self::Mapping(mapping_from_entries(map)?)
            }
            Dynamic::LongLong(_) | Dynamic::ULongLong(_) | Dynamic::Char(_) | Dynamic::ByteArray(_) => {
                return Err(unsupported(dynamic));
            }
        })
    }
}

fn mapping_from_entries<'a, I>(entries: I) -> ValueResult<Mapping>
where
    I: IntoIterator<Item = (&'a String, &'a Dynamic)>,
{
    entries
        .into_iter()
        .map(|(k, v)| Ok::<_, ValueError>((k.clone(), Value::from_dynamic(v)?)))
        .collect::<ValueResult<HashMap<_, _>>>()
        .map(Mapping::from)
}

fn unsupported(dynamic: &Dynamic) -> ValueError {
    log::debug!("Rejecting dynamic value of unsupported type {}", dynamic.type_name());
    ValueError::UnsupportedType { type_name: dynamic.type_name() }
}

impl From<&Value> for Dynamic {
    fn from(value: &Value) -> Self {
        value.to_dynamic()
    }
}

impl From<Value> for Dynamic {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Int(i) => Self::Int(i),
            Value::UInt(u) => Self::UInt(u),
            Value::Float(f) => Self::Double(f.into_inner()),
            Value::String(s) => Self::String(s),
            Value::StringList(l) => Self::StringList(l),
            Value::Array(a) => Self::List(a.into_iter().map(Self::from).collect()),
            Value::Mapping(m) => Self::Hash(m.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

impl TryFrom<&Dynamic> for Value {
    type Error = ValueError;

    fn try_from(value: &Dynamic) -> Result<Self, Self::Error> {
        Self::from_dynamic(value)
    }
}

impl TryFrom<Dynamic> for Value {
    type Error = ValueError;

    fn try_from(value: Dynamic) -> Result<Self, Self::Error> {
        Ok(match value {
            Dynamic::Null => Self::Null,
            Dynamic::Bool(b) => Self::Bool(b),
            Dynamic::Int(i) => Self::Int(i),
            Dynamic::UInt(u) => Self::UInt(u),
            Dynamic::Double(f) => Self::from(f),
            Dynamic::String(s) => Self::String(s),
            Dynamic::StringList(l) => Self::StringList(l),
            Dynamic::List(list) => Self::Array(
                list.into_iter()
                    .map(Self::try_from)
                    .collect::<ValueResult<Array>>()?,
            ),
            Dynamic::Map(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| Ok::<_, ValueError>((k, Self::try_from(v)?)))
                    .collect::<ValueResult<Mapping>>()?,
            ),
            Dynamic::Hash(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| Ok::<_, ValueError>((k, Self::try_from(v)?)))
                    .collect::<ValueResult<Mapping>>()?,
            ),
            other => return Err(unsupported(&other)),
        })
    }
}
