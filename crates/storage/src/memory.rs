//! MemoryStore: in-process text store for the ephemeral scope
//!
//! Implements the `TextStore` trait using:
//! - `BTreeMap<String, String>` for key storage
//! - `parking_lot::RwLock` for thread-safe access
//!
//! Contents live exactly as long as the store value itself; dropping it
//! drops every binding. This is the backend for the ephemeral scope, the
//! analog of a per-session store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use brine_core::{Result, TextStore};

/// In-memory text store backed by a BTreeMap with RwLock
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextStore for MemoryStore {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        Ok(self.data.write().remove(key).is_some())
    }

    fn key_names(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        self.data.write().clear();
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.data.read().len())
    }
}
