//! Core trait for the backing text store
//!
//! This module defines the `TextStore` trait: the string-only key/value
//! collaborator the typed layer is built on. Implementations live in
//! `brine-storage`; the trait lives here so upper layers can swap backends
//! without a dependency on any particular one.

use crate::error::Result;

/// String-only key/value store
///
/// Keys and values are UTF-8 text; a key is either entirely absent or bound
/// to exactly one text blob. The typed layer never caches store contents;
/// every operation goes back to the collaborator.
///
/// Thread safety: all methods must be safe to call concurrently
/// (requires Send + Sync). No atomicity is promised across calls.
pub trait TextStore: Send + Sync {
    /// Bind `value` to `key`, overwriting any previous binding
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Current text bound to `key`, or `None` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Remove `key`; returns `true` iff it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<bool>;

    /// All currently bound keys, in no particular order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn key_names(&self) -> Result<Vec<String>>;

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn clear(&self) -> Result<()>;

    /// True iff `key` is currently bound
    fn contains_item(&self, key: &str) -> Result<bool> {
        Ok(self.get_item(key)?.is_some())
    }

    /// Number of bound keys
    fn len(&self) -> Result<usize> {
        Ok(self.key_names()?.len())
    }

    /// True iff the store holds nothing
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
