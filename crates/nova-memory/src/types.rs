// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memory entry types and their persisted representation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single remembered fact.
///
/// Owned exclusively by the [`MemoryStore`](crate::MemoryStore). Created on
/// first `remember`; `last_used` refreshed on `recall`; removed only by an
/// explicit `forget`. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryEntry {
    pub key: String,
    pub value: String,
    pub category: String,
    pub created: String,
    pub last_used: String,
}

impl MemoryEntry {
    /// Creates a fresh entry with both timestamps set to now.
    pub fn new(key: impl Into<String>, value: impl Into<String>, category: impl Into<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            key: key.into(),
            value: value.into(),
            category: category.into(),
            created: now.clone(),
            last_used: now,
        }
    }
}

/// Persisted form of an entry, tolerant of missing optional fields.
///
/// Records written by older versions may lack `category`, `created`, or
/// `last_used`; loading normalizes them instead of failing the store.
#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_used: Option<String>,
}

impl From<RawEntry> for MemoryEntry {
    fn from(raw: RawEntry) -> Self {
        let created = raw.created.unwrap_or_else(|| Utc::now().to_rfc3339());
        let last_used = raw.last_used.unwrap_or_else(|| created.clone());
        Self {
            key: raw.key,
            value: raw.value,
            category: raw.category.unwrap_or_else(|| "general".to_string()),
            created,
            last_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_sets_both_timestamps() {
        let entry = MemoryEntry::new("color", "blue", "general");
        assert_eq!(entry.created, entry.last_used);
        assert!(!entry.created.is_empty());
    }

    #[test]
    fn raw_entry_normalizes_missing_fields() {
        let raw: RawEntry =
            serde_json::from_str(r#"{"key": "k", "value": "v"}"#).unwrap();
        let entry = MemoryEntry::from(raw);
        assert_eq!(entry.category, "general");
        assert_eq!(entry.created, entry.last_used);
    }

    #[test]
    fn raw_entry_preserves_present_fields() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"key": "k", "value": "v", "category": "personal",
                "created": "2026-01-01T00:00:00+00:00",
                "last_used": "2026-02-01T00:00:00+00:00"}"#,
        )
        .unwrap();
        let entry = MemoryEntry::from(raw);
        assert_eq!(entry.category, "personal");
        assert_eq!(entry.created, "2026-01-01T00:00:00+00:00");
        assert_eq!(entry.last_used, "2026-02-01T00:00:00+00:00");
    }
}
