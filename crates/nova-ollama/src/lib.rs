// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama model backend for the Nova voice assistant.
//!
//! Implements the [`ModelBackend`](nova_core::ModelBackend) trait against a
//! locally hosted Ollama server's `/api/generate` endpoint.

pub mod client;
pub mod types;

pub use client::OllamaClient;
