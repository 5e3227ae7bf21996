//! varia is a small family of crates for working with dynamically typed values in Rust.
//!
//! The central type is [`Value`], a closed tagged union of primitives and two containers ([`Array`] and [`Mapping`])
//! that can be compared, hashed and used as a key just like any other Rust value. Values can be exchanged with the
//! host application through [`Dynamic`].
//!
//! varia consists out of the following crates:
//!
//! * [`varia-value`](../varia_value/)
//! * [`varia-dynamic`](../varia_dynamic/)
//! * [`varia-utils`](../varia_utils/)
//!
//! # Example
//! ```
//! use varia::{array, mapping, Dynamic, Value};
//!
//! let value = Value::from(mapping! { "a" => 1, "b" => array![1, 2, 3] });
//! let dynamic: Dynamic = value.to_dynamic();
//! assert_eq!(Value::try_from(dynamic), Ok(value));
//! ```

pub use varia_dynamic::{Dynamic, DynamicKind};
pub use varia_utils as utils;
pub use varia_value::{
    array, mapping, Array, Mapping, Payload, Value, ValueError, ValueResult, ValueType,
};

#[cfg(test)]
mod tests {
    use super::{array, mapping, Dynamic, Mapping, Value, ValueError};

    use pretty_assertions::assert_eq;

    #[test]
    fn test_reexports() {
        let object = mapping! { "list" => array![1] };
        assert_eq!(Value::from(object.clone()).get::<Mapping>(), Ok(&object));
        assert_eq!(
            Value::try_from(Dynamic::Char('x')),
            Err(ValueError::UnsupportedType { type_name: "QChar" })
        );
        assert_eq!(super::utils::hash_range([1]), super::utils::HashSeed::default().combine(&1).finish());
    }
}
