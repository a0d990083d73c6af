// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and positive intervals.

use crate::diagnostic::ConfigError;
use crate::model::NovaConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &NovaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.model.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "model.name must not be empty".to_string(),
        });
    }

    let endpoint = config.model.endpoint.trim();
    if endpoint.is_empty() {
        errors.push(ConfigError::Validation {
            message: "model.endpoint must not be empty".to_string(),
        });
    } else if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("model.endpoint `{endpoint}` must be an http(s) URL"),
        });
    }

    if config.model.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "model.request_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.memory.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "memory.path must not be empty".to_string(),
        });
    }

    if config.speech.sample_rate == 0 {
        errors.push(ConfigError::Validation {
            message: "speech.sample_rate must be positive".to_string(),
        });
    }

    if config.speech.capture_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "speech.capture_secs must be at least 1".to_string(),
        });
    }

    if config.introspection.interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "introspection.interval_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
