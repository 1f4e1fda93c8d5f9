//! Typed store facade and mutator layers for Brine
//!
//! [`TypedStore`] wraps a raw `TextStore` collaborator with the pickle
//! codec, giving typed `set`/`get`/`has`/`del`/`keys`/`clean` plus the
//! array (`arr_*`) and object (`obj_*`) read-modify-write operations.
//! Class mismatches surface as [`Applied::WrongType`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod array;
mod object;
pub mod typed;

pub use typed::{Applied, TypedStore};
