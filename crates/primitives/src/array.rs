//! Array accessor and mutator operations
//!
//! Every operation loads the stored value through the facade's `get`; a
//! stored class other than `Array` reports [`Applied::WrongType`]. An
//! absent key is still a hard [`KeyNotFound`](brine_core::Error::KeyNotFound)
//! error; the soft channel is only for class mismatches.
//!
//! Mutators are read-modify-write: the whole array is decoded, changed in
//! memory and re-encoded over the key, O(size) per call with no delta
//! updates and no atomicity between the read and the write.
//!
//! Index arguments keep the lenient conventions of array slicing in dynamic
//! hosts: negative indices count from the end and ranges clamp instead of
//! erroring.

use tracing::trace;

use brine_core::{Result, Value};

use crate::typed::{Applied, TypedStore};

/// Clamp a possibly negative index to `[0, len]`, counting from the end
/// when negative
fn saturate_index(idx: i64, len: usize) -> usize {
    if idx < 0 {
        len.saturating_sub(idx.unsigned_abs() as usize)
    } else {
        (idx as usize).min(len)
    }
}

impl TypedStore {
    fn load_array(&self, key: &str) -> Result<Option<Vec<Value>>> {
        match self.get(key)? {
            Value::Array(items) => Ok(Some(items)),
            _ => Ok(None),
        }
    }

    // ========== Read-only accessors ==========

    /// Length of the array stored at `key`
    pub fn arr_len(&self, key: &str) -> Result<Applied<usize>> {
        Ok(match self.load_array(key)? {
            Some(items) => Applied::Value(items.len()),
            None => Applied::WrongType,
        })
    }

    /// Element at `idx`; out-of-range (or negative) indices yield `None`
    pub fn arr_item(&self, key: &str, idx: i64) -> Result<Applied<Option<Value>>> {
        Ok(match self.load_array(key)? {
            Some(items) => {
                let item = usize::try_from(idx)
                    .ok()
                    .and_then(|i| items.get(i).cloned());
                Applied::Value(item)
            }
            None => Applied::WrongType,
        })
    }

    /// Index of the first element equal to `needle`, searching from `from`
    ///
    /// A negative `from` counts from the end. `None` means not found (the
    /// `-1` of the dynamic-host convention).
    pub fn arr_index_of(
        &self,
        key: &str,
        needle: &Value,
        from: Option<i64>,
    ) -> Result<Applied<Option<usize>>> {
        Ok(match self.load_array(key)? {
            Some(items) => {
                let start = saturate_index(from.unwrap_or(0), items.len());
                let found = items[start..]
                    .iter()
                    .position(|v| v == needle)
                    .map(|pos| start + pos);
                Applied::Value(found)
            }
            None => Applied::WrongType,
        })
    }

    /// `stored ++ other` as a fresh array; the stored value is untouched
    pub fn arr_concat(&self, key: &str, other: &[Value]) -> Result<Applied<Vec<Value>>> {
        Ok(match self.load_array(key)? {
            Some(mut items) => {
                items.extend_from_slice(other);
                Applied::Value(items)
            }
            None => Applied::WrongType,
        })
    }

    /// Sub-range copy `[from, to)`; the stored value is untouched
    ///
    /// Negative bounds count from the end; both bounds clamp to the array.
    /// An inverted range yields an empty array.
    pub fn arr_slice(&self, key: &str, from: i64, to: Option<i64>) -> Result<Applied<Vec<Value>>> {
        Ok(match self.load_array(key)? {
            Some(items) => {
                let len = items.len();
                let start = saturate_index(from, len);
                let end = to.map_or(len, |t| saturate_index(t, len));
                if start >= end {
                    Applied::Value(Vec::new())
                } else {
                    Applied::Value(items[start..end].to_vec())
                }
            }
            None => Applied::WrongType,
        })
    }

    // ========== Write-back mutators ==========

    /// Append `value`; returns the new length
    pub fn arr_push(&self, key: &str, value: impl Into<Value>) -> Result<Applied<usize>> {
        let Some(mut items) = self.load_array(key)? else {
            return Ok(Applied::WrongType);
        };
        items.push(value.into());
        let len = items.len();
        trace!(key, len, "arr_push");
        self.set(key, items)?;
        Ok(Applied::Value(len))
    }

    /// Remove and return the last element; `None` when already empty
    pub fn arr_pop(&self, key: &str) -> Result<Applied<Option<Value>>> {
        let Some(mut items) = self.load_array(key)? else {
            return Ok(Applied::WrongType);
        };
        let popped = items.pop();
        trace!(key, len = items.len(), "arr_pop");
        self.set(key, items)?;
        Ok(Applied::Value(popped))
    }

    /// Remove and return the first element; `None` when already empty
    pub fn arr_shift(&self, key: &str) -> Result<Applied<Option<Value>>> {
        let Some(mut items) = self.load_array(key)? else {
            return Ok(Applied::WrongType);
        };
        let shifted = if items.is_empty() {
            None
        } else {
            Some(items.remove(0))
        };
        trace!(key, len = items.len(), "arr_shift");
        self.set(key, items)?;
        Ok(Applied::Value(shifted))
    }

    /// Insert `value` at the front; returns the new length
    pub fn arr_unshift(&self, key: &str, value: impl Into<Value>) -> Result<Applied<usize>> {
        let Some(mut items) = self.load_array(key)? else {
            return Ok(Applied::WrongType);
        };
        items.insert(0, value.into());
        let len = items.len();
        trace!(key, len, "arr_unshift");
        self.set(key, items)?;
        Ok(Applied::Value(len))
    }

    /// Reverse in place; returns the reversed array
    pub fn arr_reverse(&self, key: &str) -> Result<Applied<Vec<Value>>> {
        let Some(mut items) = self.load_array(key)? else {
            return Ok(Applied::WrongType);
        };
        items.reverse();
        trace!(key, "arr_reverse");
        self.set(key, items.clone())?;
        Ok(Applied::Value(items))
    }
}
