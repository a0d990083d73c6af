// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech service traits.
//!
//! Recognition and synthesis are external services. The recognizer owns the
//! utterance boundary; the synthesizer owns the output channel and must
//! serialize concurrent callers so spoken output never interleaves.

use async_trait::async_trait;

use crate::error::NovaError;

/// Adapter for the speech-recognition service.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Blocks until the next completed utterance and returns its transcript.
    ///
    /// Returns an empty string between utterances (silence); callers skip
    /// empty transcripts rather than submitting them.
    async fn next_utterance(&self) -> Result<String, NovaError>;
}

/// Adapter for the speech-synthesis service.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes `text` and plays it to completion.
    ///
    /// Implementations hold an internal lock for the full synthesis plus
    /// playback duration so the two loops' outputs never overlap.
    async fn speak(&self, text: &str) -> Result<(), NovaError>;
}
