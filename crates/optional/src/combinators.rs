//! Free transformation combinators over `Optional`.
//!
//! `map` is for mappers returning plain values, which are never absent.
//! `map_nonnull` is for mappers returning a [`Nullable`] handle and is strict:
//! an absent result is an [`Error::InvalidArgument`], exactly as with
//! [`Optional::of_nonnull`]. Mappers that can legitimately produce nothing
//! should return an `Optional` and go through `flat_map`.

use crate::error::Error;
use crate::nullable::Nullable;
use crate::optional::Optional;

/// Applies `mapper` to the value if present. `mapper` is not called when empty.
///
/// The result is wrapped with [`Optional::of`] without inspection, so a mapper
/// returning `None` or a null pointer yields a present wrapper around it. Use
/// [`map_nonnull`] for [`Nullable`] results.
pub fn map<T, U, F>(opt: Optional<T>, mapper: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match opt.into_option() {
        Some(v) => Optional::of(mapper(v)),
        None => Optional::empty(),
    }
}

/// Like [`map`], but an absent mapper result is [`Error::InvalidArgument`], never empty.
pub fn map_nonnull<T, N, F>(opt: Optional<T>, mapper: F) -> Result<Optional<N::Value>, Error>
where
    N: Nullable,
    F: FnOnce(T) -> N,
{
    match opt.into_option() {
        Some(v) => Optional::of_nonnull(mapper(v)),
        None => Ok(Optional::empty()),
    }
}

/// Applies `mapper` to the value if present and returns its result as is,
/// which may itself be empty.
pub fn flat_map<T, U, F>(opt: Optional<T>, mapper: F) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    match opt.into_option() {
        Some(v) => mapper(v),
        None => Optional::empty(),
    }
}
