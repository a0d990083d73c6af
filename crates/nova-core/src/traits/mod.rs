// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for Nova's external collaborators.
//!
//! The model backend, both speech services, and the stats probes are opaque
//! services with a narrow call contract. All traits use `#[async_trait]`
//! for dynamic dispatch compatibility.

pub mod backend;
pub mod probe;
pub mod speech;

pub use backend::ModelBackend;
pub use probe::StatsProbe;
pub use speech::{SpeechRecognizer, SpeechSynthesizer};
