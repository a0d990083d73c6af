// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model backend trait for locally hosted language models.

use async_trait::async_trait;

use crate::error::NovaError;

/// Adapter for the language-model backend.
///
/// Consumes a fully rendered prompt string and returns the raw completion
/// text. The call blocks for the duration of the remote request; backends
/// must bound it with a timeout and surface expiry as an error.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Sends a completion request and returns the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String, NovaError>;
}
