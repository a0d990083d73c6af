// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file-backed memory store.
//!
//! Persists a mapping from key to [`MemoryEntry`] as a single JSON object;
//! each write rewrites the whole file. An absent, empty, or unparsable file
//! initializes an empty store rather than failing the process, and a failed
//! write is logged while the in-memory state stays authoritative.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::types::{MemoryEntry, RawEntry};

/// Durable key/value store for remembered facts.
///
/// Entries are held in a `BTreeMap` so iteration order (and therefore
/// `summary()` output) is deterministic across runs.
pub struct MemoryStore {
    path: PathBuf,
    entries: BTreeMap<String, MemoryEntry>,
}

impl MemoryStore {
    /// Opens the store at `path`, loading any previously persisted entries.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = Self::load(&path);
        debug!(path = %path.display(), count = entries.len(), "memory store opened");
        Self { path, entries }
    }

    /// Loads entries from disk, tolerating an absent or corrupt file.
    fn load(path: &Path) -> BTreeMap<String, MemoryEntry> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str::<BTreeMap<String, RawEntry>>(&raw) {
            Ok(parsed) => parsed
                .into_iter()
                .map(|(k, v)| (k, MemoryEntry::from(v)))
                .collect(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "memory file unparsable, starting empty");
                BTreeMap::new()
            }
        }
    }

    /// Rewrites the whole mapping to disk.
    ///
    /// A persistence failure is logged and swallowed; the in-memory state
    /// remains authoritative for the rest of the process.
    fn save(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize memory");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "failed to persist memory");
        }
    }

    /// Inserts or overwrites the entry for `key` and persists synchronously.
    ///
    /// Overwriting replaces value and category but preserves the original
    /// `created` timestamp.
    pub fn remember(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
    ) {
        let key = key.into();
        let mut entry = MemoryEntry::new(key.clone(), value, category);
        if let Some(existing) = self.entries.get(&key) {
            entry.created = existing.created.clone();
        }
        self.entries.insert(key, entry);
        self.save();
    }

    /// Returns the stored value for `key`, refreshing its `last_used`
    /// timestamp, or `None` if the key is unknown.
    pub fn recall(&mut self, key: &str) -> Option<String> {
        let entry = self.entries.get_mut(key)?;
        entry.last_used = Utc::now().to_rfc3339();
        let value = entry.value.clone();
        self.save();
        Some(value)
    }

    /// Removes the entry for `key`, returning whether it existed.
    pub fn forget(&mut self, key: &str) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.save();
        }
        existed
    }

    /// Returns one `"<key>: <value>"` line per entry, in iteration order.
    pub fn summary(&self) -> Vec<String> {
        self.entries
            .values()
            .map(|e| format!("{}: {}", e.key, e.value))
            .collect()
    }

    /// Returns all entries, in iteration order.
    pub fn entries(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.entries.values()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, MemoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::open(dir.path().join("memory.json"));
        (dir, store)
    }

    #[test]
    fn absent_file_yields_empty_store() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
    }

    #[test]
    fn remember_then_recall_returns_value() {
        let (_dir, mut store) = temp_store();
        store.remember("favorite_color", "blue", "general");
        assert_eq!(store.recall("favorite_color").as_deref(), Some("blue"));
    }

    #[test]
    fn recall_unknown_key_returns_none() {
        let (_dir, mut store) = temp_store();
        assert!(store.recall("nothing").is_none());
    }

    #[test]
    fn overwrite_preserves_created_timestamp() {
        let (_dir, mut store) = temp_store();
        store.remember("k", "v1", "general");
        let created = store.entries().next().unwrap().created.clone();
        store.remember("k", "v2", "personal");
        let entry = store.entries().next().unwrap();
        assert_eq!(entry.value, "v2");
        assert_eq!(entry.category, "personal");
        assert_eq!(entry.created, created);
    }

    #[test]
    fn forget_present_key_removes_it() {
        let (_dir, mut store) = temp_store();
        store.remember("k", "v", "general");
        assert!(store.forget("k"));
        assert!(store.recall("k").is_none());
    }

    #[test]
    fn forget_absent_key_returns_false_and_leaves_store_unchanged() {
        let (_dir, mut store) = temp_store();
        store.remember("k", "v", "general");
        assert!(!store.forget("other"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn summary_formats_key_colon_value() {
        let (_dir, mut store) = temp_store();
        store.remember("alpha", "1", "general");
        store.remember("beta", "2", "general");
        assert_eq!(store.summary(), vec!["alpha: 1", "beta: 2"]);
    }

    #[test]
    fn corrupt_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.json");
        std::fs::write(&path, "this is not json {").unwrap();
        let store = MemoryStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn unwritable_path_keeps_in_memory_state() {
        // Point the store at a path whose parent does not exist; writes
        // fail but the in-memory state must still reflect the mutation.
        let mut store = MemoryStore::open("/nonexistent-dir/nova/memory.json");
        store.remember("k", "v", "general");
        assert_eq!(store.recall("k").as_deref(), Some("v"));
    }
}
