//! optional: an immutable present-or-empty container with defaulting,
//! conditional actions and `map`/`flat_map` combinators.

pub mod combinators;
pub mod error;
pub mod nullable;
pub mod optional;

pub use combinators::{flat_map, map, map_nonnull};
pub use error::Error;
pub use nullable::Nullable;
pub use optional::Optional;
