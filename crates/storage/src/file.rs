//! FileStore: file-backed text store for the persistent scope
//!
//! Implements the `TextStore` trait over a single JSON object file:
//! keys and values map one-to-one onto the object's fields.
//!
//! # Design Notes
//!
//! - **Load once**: the file is parsed at open; reads are served from the
//!   in-memory map under a `parking_lot::RwLock`.
//! - **Write-through**: every mutation rewrites the file before returning,
//!   so the file always reflects the last completed call.
//! - **Atomic rewrite**: writes go to a sibling temp file which is renamed
//!   over the target, so a crash mid-write leaves the previous contents.
//! - **Missing file = empty store**; a file that parses but is not a JSON
//!   object is reported as corruption rather than silently discarded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use brine_core::{Error, Result, TextStore};

/// File-backed text store, one JSON object per store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading existing contents
    ///
    /// A missing file yields an empty store; the file is first created on
    /// the first mutation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(text) => parse_contents(&path, &text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), keys = data.len(), "opened file store");
        Ok(FileStore {
            path,
            data: RwLock::new(data),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from the given map state
    ///
    /// Called with the write lock held so file contents always serialize a
    /// consistent snapshot.
    fn flush(&self, data: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = data.len(), "flushed file store");
        Ok(())
    }
}

fn parse_contents(path: &Path, text: &str) -> Result<BTreeMap<String, String>> {
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(text).map_err(|e| {
        Error::corruption(format!(
            "store file {} is not a JSON string map: {e}",
            path.display()
        ))
    })
}

impl TextStore for FileStore {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.write();
        data.insert(key.to_string(), value.to_string());
        self.flush(&data)
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        let mut data = self.data.write();
        let existed = data.remove(key).is_some();
        if existed {
            self.flush(&data)?;
        }
        Ok(existed)
    }

    fn key_names(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        let mut data = self.data.write();
        data.clear();
        self.flush(&data)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.data.read().len())
    }
}
