//! Error types for Brine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Two failure channels exist in the public API:
//! - Hard errors (this enum): absent keys, invalid arguments, storage and
//!   serialization failures.
//! - Soft failures (`Applied::WrongType` in the primitives crate): an
//!   accessor applied to a stored value of a different class. Those never
//!   surface here.

use std::io;
use thiserror::Error;

/// Result type alias for Brine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Brine typed store
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding or decoding a typed value failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// No data stored on the key. `get` raises this instead of returning a
    /// sentinel because `false` and `null` are legitimate stored values.
    #[error("no data stored on key {0:?}")]
    KeyNotFound(String),

    /// Invalid argument (bad pattern flags, uncompilable pattern source)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Stored text written by this codec failed to decode
    #[error("data corruption: {0}")]
    Corruption(String),

    /// Backing store failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Construct a `KeyNotFound` error carrying the key
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound(key.into())
    }

    /// Construct a `Serialization` error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Error::Serialization(msg.into())
    }

    /// Construct an `InvalidArgument` error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Construct a `Corruption` error
    pub fn corruption(msg: impl Into<String>) -> Self {
        Error::Corruption(msg.into())
    }

    /// Construct a `Storage` error
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// True if this is a `KeyNotFound` error
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }

    /// True if this is a `Storage` error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
