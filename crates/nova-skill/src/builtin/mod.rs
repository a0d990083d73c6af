// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in capabilities compiled into the agent.

pub mod clock;
pub mod launcher;

use std::sync::Arc;

pub use clock::{CurrentDate, CurrentTime};
pub use launcher::OpenFirefox;

use crate::capability::CapabilityRegistry;

/// Builds the registry holding every built-in capability, in catalog order.
pub fn builtin_registry() -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();
    registry.register(Arc::new(CurrentTime::new()));
    registry.register(Arc::new(CurrentDate::new()));
    registry.register(Arc::new(OpenFirefox::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_holds_three_capabilities() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn builtin_catalog_lists_all_names_in_order() {
        let catalog = builtin_registry().describe();
        assert_eq!(catalog, "get_time(time)\nget_date()\nopen_firefox()");
    }
}
