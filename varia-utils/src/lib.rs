#![warn(missing_docs)]
//! Utility methods for the varia suite of libraries.
//!
//! Provides deterministic hash combinators for building hashes of collections, and [`InlineSlot`],
//! a fixed-size inline storage cell that lets a type hide what it stores without boxing it.

mod hash;
mod slot;

pub use hash::{hash_combine, hash_one, hash_range, hash_unordered, HashSeed};
pub use slot::InlineSlot;

/// Same as [`vec!`] but calls `to_string()` on all the elements.
///
/// # Example
/// ```
/// use varia_utils::string_vec;
///
/// assert_eq!(string_vec!["30", 40], vec!["30".to_string(), "40".to_string()]);
/// ```
#[macro_export]
macro_rules! string_vec {
    ( $( $x:expr ),* $(,)? ) => {
        vec![$($x.to_string(),)*]
    };
}
