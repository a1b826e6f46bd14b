//! Persistent key/value storage.
//!
//! All saved state goes through the [`KeyValueStorage`] trait: string keys,
//! string values, synchronous reads and writes. Callers re-read on every
//! operation, so a second process sharing the same file simply wins or
//! loses on the last write.
//!
//! - [`FileStorage`] keeps every key in one JSON object file
//! - [`MemoryStorage`] is used by tests
//! - [`ScopedStorage`] prefixes keys and migrates legacy unprefixed ones

mod file;
mod memory;
mod scoped;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use scoped::{ScopedStorage, DEFAULT_PREFIX, LEGACY_KEYS};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, SolaceError};

/// String-keyed, string-valued storage.
pub trait KeyValueStorage {
    /// Read a value, `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Load a JSON-encoded value, falling back to `default` when the key is
/// missing or its contents do not decode.
pub fn load_json_or<T, S>(storage: &S, key: &str, default: T) -> Result<T>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(default);
    };
    if raw.is_empty() {
        return Ok(default);
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("Ignoring unreadable value for '{}': {}", key, e);
            Ok(default)
        }
    }
}

/// Store a value as JSON.
pub fn save_json<T, S>(storage: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let json = serde_json::to_string(value)
        .map_err(|e| SolaceError::storage(format!("Failed to encode '{}': {}", key, e)))?;
    storage.set(key, &json)
}
