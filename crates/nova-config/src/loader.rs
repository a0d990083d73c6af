// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./nova.toml` > `~/.config/nova/nova.toml` > `/etc/nova/nova.toml`
//! with environment variable overrides via `NOVA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::NovaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/nova/nova.toml` (system-wide)
/// 3. `~/.config/nova/nova.toml` (user XDG config)
/// 4. `./nova.toml` (local directory)
/// 5. `NOVA_*` environment variables
pub fn load_config() -> Result<NovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(Toml::file("/etc/nova/nova.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("nova/nova.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("nova.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<NovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NovaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NovaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `NOVA_MODEL_REQUEST_TIMEOUT_SECS`
/// must map to `model.request_timeout_secs`, not `model.request.timeout.secs`.
fn env_provider() -> Env {
    Env::prefixed("NOVA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: NOVA_MODEL_ENDPOINT -> "model_endpoint"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("model_", "model.", 1)
            .replacen("memory_", "memory.", 1)
            .replacen("speech_", "speech.", 1)
            .replacen("introspection_", "introspection.", 1);
        mapped.into()
    })
}
