#![warn(missing_docs)]
//! Dynamically typed values for varia.
//!
//! Because of the strict type system in Rust, it's nice to have a more lenient data structure that can hold data whose
//! shape is only known at runtime. [`Value`] is a closed set of variants (null, bools, 32 bit integers, floats, strings,
//! string lists, and the two containers [`Array`] and [`Mapping`]) that nest into arbitrary trees.
//!
//! Every part of the tree is `Eq + Hash`, so whole values (containers included) can be used as keys of a
//! [`HashMap`](std::collections::HashMap). Values convert to and from the host application's
//! [`Dynamic`](varia_dynamic::Dynamic), see [`Value::to_dynamic`] and [`Value::from_dynamic`].
//!
//! # Example
//! ```
//! use varia_value::{array, mapping, Array, Value};
//!
//! let object = mapping! { "a" => 1, "b" => array![1, 2, 3] };
//! let mut rebuilt = Value::from_dynamic(&Value::from(object.clone()).to_dynamic())?;
//! assert_eq!(rebuilt, Value::from(object));
//!
//! rebuilt.get_mut::<varia_value::Mapping>()?.at_mut("b")?.get_mut::<Array>()?.push(4);
//! assert_eq!(rebuilt.get::<varia_value::Mapping>()?.at("b")?.get::<Array>()?.len(), 4);
//! # Ok::<(), varia_value::ValueError>(())
//! ```

mod array;
mod dynamic;
mod mapping;
mod payload;
mod result;
mod value;

pub use array::{Array, ARRAY_SLOT_ALIGN, ARRAY_SLOT_SIZE};
pub use mapping::{Mapping, MAPPING_SLOT_ALIGN, MAPPING_SLOT_SIZE};
pub use payload::Payload;
pub use result::{ValueError, ValueResult};
pub use value::{Value, ValueType};

/// Build an [`Array`], calling [`Value::from`] on all the elements.
///
/// # Example
/// ```
/// use varia_value::{array, Value};
///
/// let array = array![1, "two", 3.0];
/// assert_eq!(array[1], Value::from("two"));
/// assert!(array![].is_empty());
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ( $( $x:expr ),+ $(,)? ) => {
        $crate::Array::from(vec![$($crate::Value::from($x),)+])
    };
}

/// Build a [`Mapping`], calling [`Value::from`] on all the values.
///
/// Later entries replace earlier ones with the same key.
///
/// # Example
/// ```
/// use varia_value::{array, mapping, Value};
///
/// let object = mapping! { "a" => 1, "b" => array![1, 2, 3] };
/// assert_eq!(object["a"], Value::from(1));
/// assert!(mapping! {}.is_empty());
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ( $( $k:expr => $v:expr ),+ $(,)? ) => {{
        let mut mapping = $crate::Mapping::new();
        $( mapping.set($k, $crate::Value::from($v)); )+
        mapping
    }};
}
