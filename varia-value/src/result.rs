use thiserror::Error;

use crate::ValueType;

/// A result type for operations on a [`Value`](crate::Value) and its containers.
///
/// Either returns something of type `T`, or a [`ValueError`].
pub type ValueResult<T> = Result<T, ValueError>;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
/// Errors that can occur while dealing with dynamic [`Value`](crate::Value)s.
///
/// All of these are recoverable. Contract violations (like indexing an [`Array`](crate::Array) out of bounds with `[]`)
/// panic instead.
pub enum ValueError {
    /// Tried to access an [`Array`](crate::Array) at an index past its end.
    #[error("index {index} is out of range for an array of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the array at the time.
        len: usize,
    },
    /// Tried to access a key that is not in the [`Mapping`](crate::Mapping).
    #[error("key {0:?} not found")]
    KeyNotFound(String),
    /// Asked for a payload of one type while the value holds another.
    #[error("expected a value of type {expected}, found {found}")]
    TypeMismatch {
        /// The type that was asked for.
        expected: ValueType,
        /// The type the value actually holds.
        found: ValueType,
    },
    /// Tried to convert a [`Dynamic`](varia_dynamic::Dynamic) of a kind that has no [`Value`](crate::Value) counterpart.
    #[error("Unsupported variant type: {type_name}")]
    UnsupportedType {
        /// The host name of the offending kind.
        type_name: &'static str,
    },
}
