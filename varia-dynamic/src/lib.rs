#![warn(missing_docs)]
//! The generic dynamic value of the host application.
//!
//! [`Dynamic`] is the loosely typed, JSON-like value the surrounding application passes around. It can hold more kinds
//! than a `varia` value can (64 bit integers, characters, raw bytes, two flavours of map), which is why converting
//! into a `varia` value may fail while converting out of one never does.
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Default)]
/// A dynamically typed value as exchanged with the host application.
pub enum Dynamic {
    /// No value.
    #[default]
    Null,
    /// A bool.
    Bool(bool),
    /// A signed 32 bit integer.
    Int(i32),
    /// An unsigned 32 bit integer.
    UInt(u32),
    /// A signed 64 bit integer.
    LongLong(i64),
    /// An unsigned 64 bit integer.
    ULongLong(u64),
    /// A double precision float.
    Double(f64),
    /// A single character.
    Char(char),
    /// A string.
    String(String),
    /// An ordered list of strings.
    StringList(Vec<String>),
    /// Raw bytes.
    ByteArray(Vec<u8>),
    /// An ordered list of values.
    List(Vec<Dynamic>),
    /// A key-ordered map of values.
    Map(BTreeMap<String, Dynamic>),
    /// An unordered map of values.
    Hash(HashMap<String, Dynamic>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
/// The runtime kind of a [`Dynamic`], without its payload.
pub enum DynamicKind {
    /// See [`Dynamic::Null`].
    Null,
    /// See [`Dynamic::Bool`].
    Bool,
    /// See [`Dynamic::Int`].
    Int,
    /// See [`Dynamic::UInt`].
    UInt,
    /// See [`Dynamic::LongLong`].
    LongLong,
    /// See [`Dynamic::ULongLong`].
    ULongLong,
    /// See [`Dynamic::Double`].
    Double,
    /// See [`Dynamic::Char`].
    Char,
    /// See [`Dynamic::String`].
    String,
    /// See [`Dynamic::StringList`].
    StringList,
    /// See [`Dynamic::ByteArray`].
    ByteArray,
    /// See [`Dynamic::List`].
    List,
    /// See [`Dynamic::Map`].
    Map,
    /// See [`Dynamic::Hash`].
    Hash,
}

impl DynamicKind {
    /// The name the host application uses for this kind.
    ///
    /// # Conversions
    /// | `DynamicKind` | name            |
    /// |:-------------:|:---------------:|
    /// | `Null`        | `null`          |
    /// | `Int`         | `int`           |
    /// | `LongLong`    | `qlonglong`     |
    /// | `Map`         | `QVariantMap`   |
    /// | `Hash`        | `QVariantHash`  |
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::LongLong => "qlonglong",
            Self::ULongLong => "qulonglong",
            Self::Double => "double",
            Self::Char => "QChar",
            Self::String => "QString",
            Self::StringList => "QStringList",
            Self::ByteArray => "QByteArray",
            Self::List => "QVariantList",
            Self::Map => "QVariantMap",
            Self::Hash => "QVariantHash",
        }
    }
}

impl Display for DynamicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Dynamic {
    /// Get the runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> DynamicKind {
        match self {
            Self::Null => DynamicKind::Null,
            Self::Bool(_) => DynamicKind::Bool,
            Self::Int(_) => DynamicKind::Int,
            Self::UInt(_) => DynamicKind::UInt,
            Self::LongLong(_) => DynamicKind::LongLong,
            Self::ULongLong(_) => DynamicKind::ULongLong,
            Self::Double(_) => DynamicKind::Double,
            Self::Char(_) => DynamicKind::Char,
            Self::String(_) => DynamicKind::String,
            Self::StringList(_) => DynamicKind::StringList,
            Self::ByteArray(_) => DynamicKind::ByteArray,
            Self::List(_) => DynamicKind::List,
            Self::Map(_) => DynamicKind::Map,
            Self::Hash(_) => DynamicKind::Hash,
        }
    }

    /// Shorthand for `self.kind().name()`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Is this [`Dynamic::Null`]?
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Dynamic {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => LongLong,
    u64 => ULongLong,
    f64 => Double,
    char => Char,
    String => String,
    Vec<String> => StringList,
    Vec<u8> => ByteArray,
    Vec<Self> => List,
    BTreeMap<String, Self> => Map,
    HashMap<String, Self> => Hash,
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::{Dynamic, DynamicKind};

    use pretty_assertions::assert_eq;

    #[test]
    fn test_kinds() {
        assert_eq!(Dynamic::default().kind(), DynamicKind::Null);
        assert_eq!(Dynamic::from(10).kind(), DynamicKind::Int);
        assert_eq!(Dynamic::from(15_u32).kind(), DynamicKind::UInt);
        assert_eq!(Dynamic::from(15_i64).kind(), DynamicKind::LongLong);
        assert_eq!(Dynamic::from("20").kind(), DynamicKind::String);
        assert_eq!(Dynamic::from(vec![b'a']).kind(), DynamicKind::ByteArray);
        assert_eq!(Dynamic::from(BTreeMap::new()).kind(), DynamicKind::Map);
        assert_eq!(Dynamic::from(HashMap::new()).kind(), DynamicKind::Hash);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Dynamic::Char('x').type_name(), "QChar");
        assert_eq!(Dynamic::List(Vec::new()).type_name(), "QVariantList");
        assert_eq!(DynamicKind::ULongLong.to_string(), "qulonglong");
        assert!(Dynamic::Null.is_null());
        assert!(!Dynamic::Int(0).is_null());
    }
}
