//! Prefixed storage keys with legacy fallback.
//!
//! Site-wide keys used to be stored unprefixed. They now live under
//! `<prefix>.<key>`; reads fall back to the old key until it is migrated.

use crate::error::Result;

use super::KeyValueStorage;

/// Default key prefix.
pub const DEFAULT_PREFIX: &str = "pgp";

/// Keys that may still exist under their unprefixed name.
pub const LEGACY_KEYS: &[&str] = &[
    "theme",
    "favorites",
    "visitHistory",
    "profile",
    "stats",
    "gallery",
    "randomColorSettings",
    "emojiSettings",
    "appSettings",
];

/// Storage wrapper that namespaces every key.
#[derive(Debug)]
pub struct ScopedStorage<S> {
    inner: S,
    prefix: String,
}

impl<S: KeyValueStorage> ScopedStorage<S> {
    /// Wrap storage with the default prefix.
    pub fn new(inner: S) -> Self {
        Self::with_prefix(inner, DEFAULT_PREFIX)
    }

    /// Wrap storage with a custom prefix.
    pub fn with_prefix(inner: S, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// The namespaced form of `key`.
    pub fn scoped_key(&self, key: &str) -> String {
        format!("{}.{}", self.prefix, key)
    }

    /// Copy each legacy key to its scoped name when the scoped value is
    /// missing. Returns how many keys were copied.
    pub fn migrate_legacy_keys(&mut self) -> Result<usize> {
        let mut migrated = 0;
        for key in LEGACY_KEYS {
            let scoped = self.scoped_key(key);
            if self.inner.get(&scoped)?.is_some() {
                continue;
            }
            if let Some(legacy) = self.inner.get(key)? {
                self.inner.set(&scoped, &legacy)?;
                migrated += 1;
            }
        }

        if migrated > 0 {
            tracing::debug!("Migrated {} legacy storage keys", migrated);
        }
        Ok(migrated)
    }

    /// Unwrap the inner storage.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: KeyValueStorage> KeyValueStorage for ScopedStorage<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.inner.get(&self.scoped_key(key))? {
            return Ok(Some(value));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let scoped = self.scoped_key(key);
        self.inner.set(&scoped, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let scoped = self.scoped_key(key);
        self.inner.remove(&scoped)?;
        self.inner.remove(key)
    }
}
