//! AttributeStore - Host-owned key-value persistence for actor state
//!
//! The host game server owns storage. Actors in this crate keep no fields of
//! their own beyond a store handle; every ability score, hit point and coin
//! is read through `get` with a default and written back through `set`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Attribute decode/encode failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("attribute '{key}' could not be converted: {source}")]
    Conversion {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw key-value interface implemented by the host
pub trait AttributeStore {
    /// Stored value, if any
    fn get_raw(&self, key: &str) -> Option<Value>;

    /// Replace the value stored under `key`
    fn set_raw(&mut self, key: &str, value: Value);

    /// Delete `key`, returning what was there
    fn remove(&mut self, key: &str) -> Option<Value>;
}

/// Typed helpers over any `AttributeStore`
pub trait AttributeStoreExt: AttributeStore {
    /// Decode the stored value, `Ok(None)` when the key is absent
    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.get_raw(key)
            .map(|value| {
                serde_json::from_value(value).map_err(|source| StoreError::Conversion {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Stored value or `default`. An undecodable value is logged and replaced
    /// by the default, matching how missing attributes are lazily defaulted.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!(key, error = %err, "discarding undecodable attribute");
                default
            }
        }
    }

    /// Encode and store a value
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Conversion {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, value);
        Ok(())
    }

    /// Integer attribute with default
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    /// Store an integer attribute
    fn set_int(&mut self, key: &str, value: i64) {
        self.set_raw(key, Value::from(value));
    }
}

impl<S: AttributeStore + ?Sized> AttributeStoreExt for S {}

/// In-process store backed by a `HashMap`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given attributes
    pub fn with_values<K: Into<String>>(values: impl IntoIterator<Item = (K, Value)>) -> Self {
        MemoryStore {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AttributeStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}
