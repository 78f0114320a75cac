//! Contract violations raised by `Optional`.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A known-present constructor was handed an absent value.
    #[error("invalid argument: value cannot be absent")]
    InvalidArgument,
    /// A value was requested from an empty `Optional`.
    #[error("illegal state: no value present")]
    IllegalState,
}
