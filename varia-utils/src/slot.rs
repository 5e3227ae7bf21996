use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::{align_of, size_of};
use std::ops::{Deref, DerefMut};

/// Fixed-size inline storage for a `T` whose size and alignment are declared up front.
///
/// A type can hold an `InlineSlot` in a private field and publish only the `SIZE` and `ALIGN`
/// it was declared with. The contained object lives inline (no extra heap indirection for the
/// slot itself), and everything a slot does is delegated to `T`: cloning clones `T`, dropping
/// drops `T`, comparing compares `T`.
///
/// The declared layout is checked when the slot is built. If `SIZE` or `ALIGN` differ from
/// `size_of::<T>()` or `align_of::<T>()`, the crate using the slot fails to compile.
///
/// ```compile_fail
/// use varia_utils::InlineSlot;
///
/// // A `u64` does not fit in 4 bytes.
/// let slot: InlineSlot<u64, 4, 4> = InlineSlot::new(1);
/// ```
///
/// # Example
/// ```
/// use std::mem::{align_of, size_of};
/// use varia_utils::InlineSlot;
///
/// type Shadow = Vec<usize>;
/// type Names = InlineSlot<Vec<String>, { size_of::<Shadow>() }, { align_of::<Shadow>() }>;
///
/// let mut names = Names::new(vec!["a".to_owned()]);
/// names.get_mut().push("b".to_owned());
/// assert_eq!(names.len(), 2);
/// assert_eq!(size_of::<Names>(), size_of::<Shadow>());
/// ```
pub struct InlineSlot<T, const SIZE: usize, const ALIGN: usize> {
    inner: T,
}

impl<T, const SIZE: usize, const ALIGN: usize> InlineSlot<T, SIZE, ALIGN> {
    const LAYOUT: () = {
        assert!(SIZE == size_of::<T>(), "InlineSlot: declared SIZE does not match size_of::<T>()");
        assert!(ALIGN == align_of::<T>(), "InlineSlot: declared ALIGN does not match align_of::<T>()");
    };

    /// Build the contained object in place.
    pub const fn new(inner: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Self { inner }
    }

    /// Get a reference to the contained object.
    pub const fn get(&self) -> &T {
        &self.inner
    }

    /// Get a mutable reference to the contained object.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Take the contained object out of the slot.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> Deref for InlineSlot<T, SIZE, ALIGN> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> DerefMut for InlineSlot<T, SIZE, ALIGN> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T, const SIZE: usize, const ALIGN: usize> From<T> for InlineSlot<T, SIZE, ALIGN> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Default, const SIZE: usize, const ALIGN: usize> Default for InlineSlot<T, SIZE, ALIGN> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone, const SIZE: usize, const ALIGN: usize> Clone for InlineSlot<T, SIZE, ALIGN> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner);
    }
}

impl<T: PartialEq, const SIZE: usize, const ALIGN: usize> PartialEq for InlineSlot<T, SIZE, ALIGN> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, const SIZE: usize, const ALIGN: usize> Eq for InlineSlot<T, SIZE, ALIGN> {}

impl<T: Hash, const SIZE: usize, const ALIGN: usize> Hash for InlineSlot<T, SIZE, ALIGN> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T: fmt::Debug, const SIZE: usize, const ALIGN: usize> fmt::Debug for InlineSlot<T, SIZE, ALIGN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
