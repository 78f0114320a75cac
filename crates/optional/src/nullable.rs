//! `Nullable` capability: types that can declare themselves absent.

use core::ptr::NonNull;

use crate::optional::Optional;

/// A handle that may or may not refer to a value.
///
/// Implementors decide what "absent" means for them (a `None`, a null
/// pointer, an empty `Optional`) and how to unwrap the payload when present.
/// `into_value` must return `None` exactly when `is_absent` is true.
pub trait Nullable {
    type Value;

    fn is_absent(&self) -> bool;

    fn into_value(self) -> Option<Self::Value>;

    #[inline]
    fn is_present(&self) -> bool { !self.is_absent() }
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn is_absent(&self) -> bool { self.is_none() }

    #[inline]
    fn into_value(self) -> Option<T> { self }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    #[inline]
    fn is_absent(&self) -> bool { self.is_empty() }

    #[inline]
    fn into_value(self) -> Option<T> { self.into_option() }
}

// Raw pointers unwrap to `NonNull` rather than `T`: reading through them is
// the caller's business.
impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn is_absent(&self) -> bool { self.is_null() }

    #[inline]
    fn into_value(self) -> Option<NonNull<T>> { NonNull::new(self as *mut T) }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn is_absent(&self) -> bool { self.is_null() }

    #[inline]
    fn into_value(self) -> Option<NonNull<T>> { NonNull::new(self) }
}
