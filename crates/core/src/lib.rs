//! Core types and traits for Brine
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Value: unified enum for everything the store can hold
//! - Pattern: regular-expression pattern values (`/source/flags`)
//! - FnSource: function-literal values carried as parsed source
//! - codec: the pickle/unpickle layer (discriminated envelope + heuristic
//!   classification of foreign text)
//! - TextStore: trait for the string-only backing store
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod callable;
pub mod codec;
pub mod error;
pub mod pattern;
pub mod traits;
pub mod value;

// Re-export commonly used types at the crate root
pub use callable::FnSource;
pub use codec::{decode, decode_trusted, decode_with, encode, Trust};
pub use error::{Error, Result};
pub use pattern::Pattern;
pub use traits::TextStore;
pub use value::Value;
