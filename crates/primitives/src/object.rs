//! Object (mapping) accessor and mutator operations
//!
//! These apply only when the decoded value's class is `Object`, not an
//! array and not null. Anything else reports [`Applied::WrongType`]; an absent
//! key is a hard error, exactly as in the array layer.
//!
//! `obj_set` and `obj_remove` are read-modify-write: the whole mapping is
//! re-encoded and overwrites the key.

use std::collections::HashMap;

use tracing::trace;

use brine_core::{Result, Value};

use crate::typed::{Applied, TypedStore};

impl TypedStore {
    fn load_object(&self, key: &str) -> Result<Option<HashMap<String, Value>>> {
        match self.get(key)? {
            Value::Object(fields) => Ok(Some(fields)),
            _ => Ok(None),
        }
    }

    /// Field names of the mapping stored at `key`, in no particular order
    pub fn obj_keys(&self, key: &str) -> Result<Applied<Vec<String>>> {
        Ok(match self.load_object(key)? {
            Some(fields) => Applied::Value(fields.into_keys().collect()),
            None => Applied::WrongType,
        })
    }

    /// Value of `field`; `None` when the field is absent
    ///
    /// An absent field is reported inside the applied result, distinct from
    /// the wrong-class case.
    pub fn obj_get(&self, key: &str, field: &str) -> Result<Applied<Option<Value>>> {
        Ok(match self.load_object(key)? {
            Some(mut fields) => Applied::Value(fields.remove(field)),
            None => Applied::WrongType,
        })
    }

    /// Set `field` to `value` and write the mapping back
    pub fn obj_set(
        &self,
        key: &str,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Applied<()>> {
        let Some(mut fields) = self.load_object(key)? else {
            return Ok(Applied::WrongType);
        };
        fields.insert(field.to_string(), value.into());
        trace!(key, field, "obj_set");
        self.set(key, fields)?;
        Ok(Applied::Value(()))
    }

    /// Remove `field` and write the mapping back
    ///
    /// The applied result reports whether the field was present.
    pub fn obj_remove(&self, key: &str, field: &str) -> Result<Applied<bool>> {
        let Some(mut fields) = self.load_object(key)? else {
            return Ok(Applied::WrongType);
        };
        let existed = fields.remove(field).is_some();
        trace!(key, field, existed, "obj_remove");
        self.set(key, fields)?;
        Ok(Applied::Value(existed))
    }
}
