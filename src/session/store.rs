// ABOUTME: Durable session storage port with in-memory and file-backed implementations
// ABOUTME: Owns the three session keys: token, user JSON, and last-validation timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZRun

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::{ClientError, ClientResult};

/// Durable key/value storage scoped to the client session
///
/// The [`SessionManager`](crate::session::SessionManager) is the only writer
/// of these keys: `token`, `user` (JSON `{email, roles[]}`), and
/// `lastValidation` (epoch-millisecond string). Implementations only need
/// plain string get/put/remove; the manager handles serialization and the
/// all-three-keys-together clearing discipline.
pub trait SessionStore: Send + Sync {
    /// Read a value by key
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn get(&self, key: &str) -> ClientResult<Option<String>>;

    /// Write a value by key
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn put(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn remove(&self, key: &str) -> ClientResult<()>;
}

/// In-memory session store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// File-backed session store
///
/// Persists all keys as one JSON object. Reads tolerate a missing file
/// (treated as empty); a corrupt file is reported as a storage error so the
/// manager can fail closed.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles against the backing file
    io_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Default session file under the platform data directory
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zrun")
            .join("session.json")
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> ClientResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ClientError::storage(format!("read {}: {e}", self.path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| ClientError::storage(format!("parse {}: {e}", self.path.display())))
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::storage(format!("create {}: {e}", parent.display())))?;
        }
        let raw = serde_json::to_string(entries)
            .map_err(|e| ClientError::storage(format!("serialize session: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| ClientError::storage(format!("write {}: {e}", self.path.display())))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        let _guard = self
            .io_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> ClientResult<()> {
        let _guard = self
            .io_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let _guard = self
            .io_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("token").unwrap(), None);
        store.put("token", "abc123").unwrap();
        assert_eq!(store.get("token").unwrap(), Some("abc123".into()));
        store.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn memory_store_remove_of_absent_key_is_ok() {
        let store = MemorySessionStore::new();
        assert!(store.remove("lastValidation").is_ok());
    }
}
