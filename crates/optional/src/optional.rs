//! The `Optional<T>` container.

use core::any::type_name;
use core::fmt;

use tracing::debug;

use crate::combinators;
use crate::error::Error;
use crate::nullable::Nullable;

/// A container that either holds exactly one `T` (present) or nothing (empty).
///
/// The state is fixed at construction; there is no API that turns a present
/// `Optional` into an empty one or swaps its value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// An empty instance.
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// A present instance wrapping `value` as is. Never fails.
    ///
    /// `value` is not inspected: an `Option`, raw pointer or `Optional` passed
    /// here is stored even when absent, giving a present wrapper around
    /// `None` or null. Route [`Nullable`] handles through
    /// [`Optional::of_nonnull`] or [`Optional::of_nullable`] instead.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// A present instance built from a handle the caller asserts is present.
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is absent instead of
    /// producing an empty `Optional`.
    pub fn of_nonnull<N>(value: N) -> Result<Self, Error>
    where
        N: Nullable<Value = T>,
    {
        match value.into_value() {
            Some(v) => Ok(Self::of(v)),
            None => {
                debug!(ty = type_name::<N>(), "rejected absent value in of_nonnull");
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Present if `value` is present, empty otherwise.
    #[inline]
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        Self { value: value.into_value() }
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The contained value, or [`Error::IllegalState`] when empty.
    pub fn get(self) -> Result<T, Error> {
        match self.value {
            Some(v) => Ok(v),
            None => {
                debug!(ty = type_name::<Self>(), "get called on empty optional");
                Err(Error::IllegalState)
            }
        }
    }

    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        match self.value {
            Some(v) => v,
            None => fallback,
        }
    }

    /// Like [`Optional::or_else`], but the fallback is only computed when empty.
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(v) => v,
            None => supplier(),
        }
    }

    /// The contained value, or `Err(error)` carrying exactly the given error.
    #[inline]
    pub fn or_else_throw<E>(self, error: E) -> Result<T, E> {
        match self.value {
            Some(v) => Ok(v),
            None => Err(error),
        }
    }

    #[inline]
    pub fn if_present<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Some(v) = self.value {
            action(v);
        }
    }

    /// Runs `action` with the value when present, `empty_action` otherwise.
    #[inline]
    pub fn if_present_or_else<F, G>(self, action: F, empty_action: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        match self.value {
            Some(v) => action(v),
            None => empty_action(),
        }
    }

    /// Borrows the contained value without consuming the container.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional { value: self.value.as_ref() }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// See [`combinators::map`].
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        combinators::map(self, mapper)
    }

    /// See [`combinators::map_nonnull`].
    #[inline]
    pub fn map_nonnull<N, F>(self, mapper: F) -> Result<Optional<N::Value>, Error>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        combinators::map_nonnull(self, mapper)
    }

    /// See [`combinators::flat_map`].
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        combinators::flat_map(self, mapper)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

/// Renders `Optional[<value>]` or `Optional.empty`.
///
/// Only available when `T: Display`; `Optional<NonNull<T>>` from a pointer
/// source has no rendering, use `{:?}` for it.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Optional[{v}]"),
            None => f.write_str("Optional.empty"),
        }
    }
}
