// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability registry and built-in capabilities for the Nova voice
//! assistant.
//!
//! Capabilities are the functions the model may call through a `function`
//! action: each declares a fixed parameter list, rendered into the system
//! preamble's catalog, and is dispatched by name from decoded model output.

pub mod builtin;
pub mod capability;

pub use builtin::builtin_registry;
pub use capability::{Capability, CapabilityRegistry};
