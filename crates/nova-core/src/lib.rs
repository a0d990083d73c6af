// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Nova voice assistant.
//!
//! This crate provides the foundational trait definitions, error types, and
//! conversation types used throughout the Nova workspace. The speech
//! services, model backend, and stats probes are modeled as opaque adapters
//! implementing traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::NovaError;
pub use types::{Action, CapabilityDescriptor, ConversationTurn, Role};

// Re-export adapter traits at crate root.
pub use traits::{ModelBackend, SpeechRecognizer, SpeechSynthesizer, StatsProbe};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nova_error_has_all_variants() {
        let _config = NovaError::Config("test".into());
        let _backend = NovaError::Backend {
            message: "test".into(),
            source: None,
        };
        let _capability = NovaError::Capability {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _memory = NovaError::Memory {
            message: "test".into(),
            source: None,
        };
        let _speech = NovaError::Speech {
            message: "test".into(),
            source: None,
        };
        let _timeout = NovaError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = NovaError::Internal("test".into());
    }

    #[test]
    fn action_variants_are_distinct() {
        let text = Action::Text {
            response: "hi".into(),
        };
        let memory = Action::Memory {
            key: "k".into(),
            value: "v".into(),
        };
        assert_ne!(text, memory);
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_backend<T: ModelBackend>() {}
        fn _assert_recognizer<T: SpeechRecognizer>() {}
        fn _assert_synthesizer<T: SpeechSynthesizer>() {}
        fn _assert_probe<T: StatsProbe>() {}
    }
}
