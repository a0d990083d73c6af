// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nova memory` command implementation.
//!
//! Operator surface for the long-term memory store: list remembered facts
//! or remove one by key.

use nova_config::model::NovaConfig;
use nova_core::NovaError;
use nova_memory::MemoryStore;

/// Runs `nova memory list`.
pub fn run_memory_list(config: &NovaConfig) -> Result<(), NovaError> {
    let store = MemoryStore::open(&config.memory.path);

    if store.is_empty() {
        println!("no facts stored");
        return Ok(());
    }

    for entry in store.entries() {
        println!(
            "{}: {} [{}] (created {}, last used {})",
            entry.key, entry.value, entry.category, entry.created, entry.last_used
        );
    }
    Ok(())
}

/// Runs `nova memory forget <key>`.
pub fn run_memory_forget(config: &NovaConfig, key: &str) -> Result<(), NovaError> {
    let mut store = MemoryStore::open(&config.memory.path);

    if store.forget(key) {
        println!("forgot `{key}`");
    } else {
        println!("nothing stored under `{key}`");
    }
    Ok(())
}
