// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech services for the Nova voice assistant.
//!
//! Recognition and synthesis are thin wrappers over external binaries: an
//! audio recorder plus the Vosk CLI on the input side, and Piper plus a WAV
//! player on the output side. The synthesizer serializes the output channel
//! so concurrent speakers never overlap.

pub mod checks;
pub mod recognizer;
pub mod synthesizer;

pub use checks::check_speech_models;
pub use recognizer::VoskRecognizer;
pub use synthesizer::PiperSynthesizer;
