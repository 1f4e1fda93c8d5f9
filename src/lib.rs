//! BrineDB - typed persistence over string-only key/value stores
//!
//! Brine augments plain text stores with a typed layer: numbers, arrays,
//! mappings, regex patterns and function literals go in under string keys
//! and come back with their original type reconstructed, plus array- and
//! mapping-style mutators that operate on stored compound values.
//!
//! # Quick Start
//!
//! ```no_run
//! use brinedb::{Brine, Value};
//!
//! # fn main() -> brinedb::Result<()> {
//! let db = Brine::open("/path/to/brine.json")?;
//!
//! // Persistent scope: survives reopen
//! db.persistent().set("count", 3i64)?;
//! db.persistent().set("log", Vec::<Value>::new())?;
//! db.persistent().arr_push("log", "entry")?;
//!
//! // Ephemeral scope: gone when `db` drops
//! db.ephemeral().set("draft", vec![Value::Int(1), Value::Int(2)])?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The host owns two independent [`TypedStore`] scopes, persistent
//! (file-backed) and ephemeral (in-memory), that never share keys or
//! values. Each is a facade over an injected raw `TextStore`; the codec in
//! `brine-core` carries every value through the text-only channel.

use std::path::Path;
use std::sync::Arc;

pub use brine_core::{
    decode, decode_trusted, encode, Error, FnSource, Pattern, Result, TextStore, Trust, Value,
};
pub use brine_primitives::{Applied, TypedStore};
pub use brine_storage::{FileStore, MemoryStore};

/// The two-scope Brine host
///
/// Owns one persistent and one ephemeral [`TypedStore`]. The scopes are
/// independent resources: no shared state, no coordination, no key overlap.
pub struct Brine {
    persistent: TypedStore,
    ephemeral: TypedStore,
}

impl Brine {
    /// Open with a file-backed persistent scope at `path`
    ///
    /// The ephemeral scope is memory-backed and empties when the value
    /// drops; the persistent scope reloads from `path` on the next open.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Brine {
            persistent: TypedStore::new(Arc::new(FileStore::open(path)?)),
            ephemeral: TypedStore::new(Arc::new(MemoryStore::new())),
        })
    }

    /// Open with both scopes memory-backed (tests, demos)
    pub fn in_memory() -> Self {
        Brine {
            persistent: TypedStore::new(Arc::new(MemoryStore::new())),
            ephemeral: TypedStore::new(Arc::new(MemoryStore::new())),
        }
    }

    /// The persistent scope
    pub fn persistent(&self) -> &TypedStore {
        &self.persistent
    }

    /// The ephemeral scope
    pub fn ephemeral(&self) -> &TypedStore {
        &self.ephemeral
    }
}
