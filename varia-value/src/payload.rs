use ordered_float::OrderedFloat;

use crate::{Array, Mapping, Value, ValueType};

mod sealed {
    pub trait Sealed {}
}

/// A Rust type that one of the [`Value`] variants carries.
///
/// This is what drives the typed accessors on [`Value`]. `T::peek` only succeeds when the value currently holds the
/// variant for `T`, there is no numeric coercion between `i32`, `u32` and `f64`.
///
/// | `Payload`     | Variant                 |
/// |:-------------:|:-----------------------:|
/// | `bool`        | [`Value::Bool`]         |
/// | `i32`         | [`Value::Int`]          |
/// | `u32`         | [`Value::UInt`]         |
/// | `f64`         | [`Value::Float`]        |
/// | `String`      | [`Value::String`]       |
/// | `Vec<String>` | [`Value::StringList`]   |
/// | [`Array`]     | [`Value::Array`]        |
/// | [`Mapping`]   | [`Value::Mapping`]      |
///
/// The set of variants is closed, so this trait is sealed:
/// ```compile_fail
/// use varia_value::{Payload, Value, ValueType};
///
/// struct Meters(i32);
///
/// impl Payload for Meters {
///     const TYPE: ValueType = ValueType::Int;
///     fn peek(_: &Value) -> Option<&Self> { None }
///     fn peek_mut(_: &mut Value) -> Option<&mut Self> { None }
///     fn extract(value: Value) -> Result<Self, Value> { Err(value) }
/// }
/// ```
pub trait Payload: sealed::Sealed + Sized {
    /// The variant this type is stored in.
    const TYPE: ValueType;

    /// Borrow the payload, if `value` holds this type.
    fn peek(value: &Value) -> Option<&Self>;

    /// Mutably borrow the payload, if `value` holds this type.
    fn peek_mut(value: &mut Value) -> Option<&mut Self>;

    /// Take the payload out of `value`.
    ///
    /// # Errors
    /// Gives `value` back untouched if it does not hold this type.
    fn extract(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Payload for $ty {
                const TYPE: ValueType = ValueType::$variant;

                fn peek(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn peek_mut(value: &mut Value) -> Option<&mut Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn extract(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_payload! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    String => String,
    Vec<String> => StringList,
    Array => Array,
    Mapping => Mapping,
}

// Floats are stored as `OrderedFloat` so `Value` can be `Eq + Hash`, but are handed out as plain `f64`.
impl sealed::Sealed for f64 {}

impl Payload for f64 {
    const TYPE: ValueType = ValueType::Float;

    fn peek(value: &Value) -> Option<&Self> {
        match value {
            Value::Float(OrderedFloat(f)) => Some(f),
            _ => None,
        }
    }

    fn peek_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Float(OrderedFloat(f)) => Some(f),
            _ => None,
        }
    }

    fn extract(value: Value) -> Result<Self, Value> {
        match value {
            Value::Float(f) => Ok(f.into_inner()),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Payload;
    use crate::{Array, Value, ValueType};

    use pretty_assertions::assert_eq;

    #[test]
    fn test_peek_matches_variant_only() {
        let int = Value::from(42);
        assert_eq!(i32::peek(&int), Some(&42));
        assert_eq!(u32::peek(&int), None);
        assert_eq!(f64::peek(&int), None);
        assert_eq!(<i32 as Payload>::TYPE, ValueType::Int);
        assert_eq!(<Vec<String> as Payload>::TYPE, ValueType::StringList);
    }

    #[test]
    fn test_every_payload_type_matches_its_variant() {
        fn check<T: Payload>(value: &Value) {
            assert_eq!(T::TYPE, value.type_of());
            assert!(T::peek(value).is_some());
        }
        check::<bool>(&Value::from(true));
        check::<i32>(&Value::from(1));
        check::<u32>(&Value::from(1_u32));
        check::<f64>(&Value::from(1.0));
        check::<String>(&Value::from("a"));
        check::<Vec<String>>(&Value::from(vec!["a".to_owned()]));
        check::<Array>(&Value::from(Array::new()));
        check::<crate::Mapping>(&Value::from(crate::Mapping::new()));
    }

    #[test]
    fn test_peek_mut_float() {
        let mut value = Value::from(1.5);
        if let Some(f) = f64::peek_mut(&mut value) {
            *f *= 2.0;
        }
        assert_eq!(value, Value::from(3.0));
    }

    #[test]
    fn test_extract_gives_back_on_mismatch() {
        let value = Value::from(Array::new());
        let value = String::extract(value).unwrap_err();
        assert_eq!(Array::extract(value), Ok(Array::new()));
    }
}
