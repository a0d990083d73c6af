// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait and registry.
//!
//! The [`Capability`] trait defines the unified interface for everything the
//! model may call through a `function` action. The [`CapabilityRegistry`]
//! resolves untrusted names from decoded model output to capabilities and
//! renders the catalog embedded in the system preamble.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use nova_core::{CapabilityDescriptor, NovaError};

/// A named, invocable function the agent may call.
///
/// Arguments are applied by parameter name from the decoded `args` mapping;
/// capabilities tolerate missing arguments by falling back to defaults.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Returns the descriptor (name plus declared parameter list).
    fn descriptor(&self) -> &CapabilityDescriptor;

    /// Invokes the capability and returns its text result.
    async fn invoke(&self, args: &HashMap<String, String>) -> Result<String, NovaError>;
}

/// Registry of capabilities, keyed by name.
///
/// The set is established at construction and immutable thereafter;
/// `describe()` renders one catalog line per capability in registration
/// order.
pub struct CapabilityRegistry {
    order: Vec<String>,
    entries: HashMap<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Registers a capability. Later registrations under the same name
    /// replace earlier ones without changing catalog order.
    pub fn register(&mut self, capability: Arc<dyn Capability>) {
        let name = capability.descriptor().name.clone();
        if !self.entries.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.entries.insert(name, capability);
    }

    /// Renders the catalog: one `name(param1, param2)` line per capability,
    /// in registration order.
    pub fn describe(&self) -> String {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name))
            .map(|c| c.descriptor().render())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the descriptors in registration order.
    pub fn descriptors(&self) -> Vec<CapabilityDescriptor> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name))
            .map(|c| c.descriptor().clone())
            .collect()
    }

    /// Invokes the named capability with `args` and returns its text result.
    ///
    /// An unregistered name yields a descriptive "unknown function" result,
    /// and a failing capability is converted to a descriptive text result;
    /// neither condition propagates to the caller.
    pub async fn invoke(&self, name: &str, args: &HashMap<String, String>) -> String {
        let Some(capability) = self.entries.get(name) else {
            warn!(name, "model requested unregistered function");
            return format!("Unknown function '{name}'.");
        };

        debug!(name, "invoking capability");
        match capability.invoke(args).await {
            Ok(result) => result,
            Err(e) => {
                warn!(name, error = %e, "capability invocation failed");
                format!("I tried to run {name} but it failed: {e}")
            }
        }
    }

    /// Returns the number of registered capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no capabilities are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
