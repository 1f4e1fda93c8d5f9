//! TypedStore: the typed facade over a raw text store
//!
//! ## Design
//!
//! TypedStore is a stateless facade over an injected `TextStore`
//! collaborator. It holds no state beyond an `Arc<dyn TextStore>` reference;
//! every operation encodes or decodes on the way through and goes straight
//! back to the collaborator. The host constructs one TypedStore per scope
//! (ephemeral, persistent); there are no ambient singletons, and two
//! instances never share keys.
//!
//! ## Absent keys
//!
//! `get` raises [`Error::KeyNotFound`] for an absent key rather than
//! returning a sentinel, because `false` and `null` are legitimate stored
//! values that must stay distinguishable from "no data".
//!
//! ## Thread Safety
//!
//! TypedStore is `Send + Sync`. Mutators in the sibling modules are
//! read-modify-write with no atomicity across the two steps; a concurrent
//! writer to the same key between them loses (last write wins).

use std::sync::Arc;

use tracing::trace;

use brine_core::codec;
use brine_core::{Error, Result, TextStore, Trust, Value};

/// Outcome of an accessor applied to a stored compound value
///
/// Accessors and mutators that require a particular stored class report a
/// class mismatch as `WrongType`, a soft failure on its own channel that is
/// never conflated with a legitimately stored `false`.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<T> {
    /// The stored value had the required class; here is the result
    Value(T),
    /// The key held a value of a different class; nothing was done
    WrongType,
}

impl<T> Applied<T> {
    /// The result, or `None` on a class mismatch
    pub fn value(self) -> Option<T> {
        match self {
            Applied::Value(v) => Some(v),
            Applied::WrongType => None,
        }
    }

    /// True if the operation applied
    pub fn is_value(&self) -> bool {
        matches!(self, Applied::Value(_))
    }

    /// True on a class mismatch
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Applied::WrongType)
    }

    /// Map the applied result, leaving `WrongType` untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Applied<U> {
        match self {
            Applied::Value(v) => Applied::Value(f(v)),
            Applied::WrongType => Applied::WrongType,
        }
    }
}

/// Typed key/value facade over a raw text store
#[derive(Clone)]
pub struct TypedStore {
    store: Arc<dyn TextStore>,
}

impl TypedStore {
    /// Create a facade around the given collaborator
    pub fn new(store: Arc<dyn TextStore>) -> Self {
        TypedStore { store }
    }

    /// The underlying raw store
    pub fn raw(&self) -> &Arc<dyn TextStore> {
        &self.store
    }

    // ========== Core operations ==========

    /// Encode a value and persist it under `key`
    ///
    /// Overwrites any previous binding, whatever its class.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let text = codec::encode(&value)?;
        trace!(key, class = value.type_name(), "set");
        self.store.set_item(key, &text)
    }

    /// Load and decode the value stored under `key`
    ///
    /// Uses the default (untrusted) decode: untagged function-shaped text
    /// comes back as an opaque string.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<Value> {
        self.get_with(key, Trust::Untrusted)
    }

    /// Load and decode, asserting trust in the store's contents
    ///
    /// The trusted path additionally reconstructs function values from
    /// untagged function-shaped text. Only call this when every writer of
    /// the underlying store is trusted.
    pub fn get_trusted(&self, key: &str) -> Result<Value> {
        self.get_with(key, Trust::Trusted)
    }

    fn get_with(&self, key: &str, trust: Trust) -> Result<Value> {
        let text = self
            .store
            .get_item(key)?
            .ok_or_else(|| Error::key_not_found(key))?;
        codec::decode_with(&text, trust)
    }

    /// True iff `key` is currently bound
    ///
    /// A raw existence check, independent of whether the text would decode.
    pub fn has(&self, key: &str) -> Result<bool> {
        self.store.contains_item(key)
    }

    /// Remove `key`; returns `true` iff it existed
    pub fn del(&self, key: &str) -> Result<bool> {
        trace!(key, "del");
        self.store.remove_item(key)
    }

    /// All currently bound keys, in no particular order
    ///
    /// Empty when nothing is stored.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.store.key_names()
    }

    /// Remove every key in the store
    pub fn clean(&self) -> Result<()> {
        trace!("clean");
        self.store.clear()
    }
}
