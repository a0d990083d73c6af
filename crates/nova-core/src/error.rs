// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Nova voice assistant.

use thiserror::Error;

/// The primary error type used across the Nova workspace.
#[derive(Debug, Error)]
pub enum NovaError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Model backend errors (endpoint unreachable, non-2xx status, malformed body).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Capability invocation errors (unknown name, external launch failure).
    #[error("capability error: {message}")]
    Capability {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Memory store persistence errors (file unwritable, serialization failure).
    #[error("memory error: {message}")]
    Memory {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Speech service errors (recognizer/synthesizer launch failure, missing artifact).
    #[error("speech error: {message}")]
    Speech {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
