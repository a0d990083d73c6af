// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reactive speech loop.
//!
//! Waits on the recognizer for completed utterances, forwards them through
//! the conversation engine, and speaks the result. An exit phrase speaks a
//! fixed farewell and cancels the shared shutdown token so the
//! introspection loop terminates with it.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use nova_core::{SpeechRecognizer, SpeechSynthesizer};

use crate::engine::ConversationEngine;

/// Phrases that end the session, compared case-insensitively.
pub const EXIT_PHRASES: [&str; 3] = ["exit", "quit", "stop listening"];

/// Spoken when an exit phrase is recognized.
const FAREWELL: &str = "Okay, shutting down.";

/// Reactive control loop: utterance in, spoken reply out.
pub struct SpeechLoop {
    engine: Arc<ConversationEngine>,
    recognizer: Arc<dyn SpeechRecognizer>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    shutdown: CancellationToken,
}

impl SpeechLoop {
    pub fn new(
        engine: Arc<ConversationEngine>,
        recognizer: Arc<dyn SpeechRecognizer>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            engine,
            recognizer,
            synthesizer,
            shutdown,
        }
    }

    /// Runs until an exit phrase is recognized or the token is cancelled.
    pub async fn run(&self) {
        info!("listening for utterances");
        loop {
            let text = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                result = self.recognizer.next_utterance() => match result {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(error = %e, "speech recognition failed");
                        // Back off so a broken recognizer doesn't spin.
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        continue;
                    }
                },
            };

            if text.is_empty() {
                continue;
            }
            info!(text = %text, "utterance received");

            if is_exit_phrase(&text) {
                if let Err(e) = self.synthesizer.speak(FAREWELL).await {
                    warn!(error = %e, "failed to speak farewell");
                }
                info!("exit phrase recognized, shutting down");
                self.shutdown.cancel();
                break;
            }

            let reply = self.engine.submit(&text).await;
            if let Err(e) = self.synthesizer.speak(&reply).await {
                // The turn completes silently; synthesis failure is not
                // escalated.
                warn!(error = %e, "speech synthesis failed");
            }
        }
    }
}

/// Returns true when `text` case-insensitively equals an exit phrase.
fn is_exit_phrase(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    EXIT_PHRASES.iter().any(|phrase| lowered == *phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_phrases_match_case_insensitively() {
        assert!(is_exit_phrase("exit"));
        assert!(is_exit_phrase("QUIT"));
        assert!(is_exit_phrase("Stop Listening"));
        assert!(is_exit_phrase("  exit  "));
    }

    #[test]
    fn ordinary_utterances_are_not_exit_phrases() {
        assert!(!is_exit_phrase("please exit the building"));
        assert!(!is_exit_phrase("what time is it"));
        assert!(!is_exit_phrase(""));
    }
}
