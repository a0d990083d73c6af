// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation engine: history, model calls, decoding, and dispatch.
//!
//! Both control loops funnel through one engine instance, which is the sole
//! point of cross-loop coordination. History and memory live behind
//! separate locks scoped to the single mutation; neither lock is held
//! across the blocking backend call, so the two loops' model requests do
//! not serialize behind each other.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use nova_core::{Action, ConversationTurn, ModelBackend};
use nova_memory::MemoryStore;
use nova_protocol::{decode, encode_preamble, DecodeError};
use nova_skill::CapabilityRegistry;

/// Fixed reply when the model output is not parsable JSON.
const UNPARSABLE_TEXT: &str = "Error: invalid JSON response from the model.";
/// Fixed reply when the model output has an unknown or missing type.
const UNKNOWN_TYPE_TEXT: &str = "Error: invalid response type from the model.";
/// Fixed reply when a memory instruction is missing key or value.
const INCOMPLETE_MEMORY_TEXT: &str = "Memory format incomplete.";

/// Owns conversation history and routes decoded actions to their handlers.
///
/// The engine never calls the speech service itself; the returned text is
/// exactly what the caller speaks. That keeps the engine decoupled from
/// I/O side effects for testability.
pub struct ConversationEngine {
    backend: Arc<dyn ModelBackend>,
    registry: Arc<CapabilityRegistry>,
    history: Mutex<Vec<ConversationTurn>>,
    memory: Mutex<MemoryStore>,
}

impl ConversationEngine {
    /// Creates an engine whose history starts with the protocol preamble
    /// rendered from the registry's capability catalog.
    pub fn new(
        agent_name: &str,
        backend: Arc<dyn ModelBackend>,
        registry: Arc<CapabilityRegistry>,
        memory: MemoryStore,
    ) -> Self {
        let preamble = encode_preamble(agent_name, &registry.descriptors());
        Self {
            backend,
            registry,
            history: Mutex::new(vec![ConversationTurn::system(preamble)]),
            memory: Mutex::new(memory),
        }
    }

    /// Runs one conversational turn and returns the text to speak.
    ///
    /// Appends the user turn, sends the rendered history to the backend,
    /// records the raw assistant reply (even when it later fails to
    /// decode), then dispatches the decoded action. A backend failure
    /// appends no assistant turn and is returned as descriptive text.
    pub async fn submit(&self, input: &str) -> String {
        let prompt = {
            let mut history = self.history.lock().await;
            history.push(ConversationTurn::user(input));
            render_prompt(&history)
        };

        let raw = match self.backend.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "model backend call failed");
                return format!("Error talking to the language model: {e}");
            }
        };

        // Recorded before decoding so future prompts see what the model
        // "said" even if it was malformed.
        {
            let mut history = self.history.lock().await;
            history.push(ConversationTurn::assistant(raw.clone()));
        }

        let action = match decode(&raw) {
            Ok(action) => action,
            Err(e) => {
                warn!(error = %e, raw = %raw, "model reply failed to decode");
                return decode_failure_text(e).to_string();
            }
        };

        self.dispatch(action).await
    }

    /// Routes a decoded action to its handler.
    async fn dispatch(&self, action: Action) -> String {
        match action {
            Action::Text { response } => response,
            Action::Function { name, args } => self.registry.invoke(&name, &args).await,
            Action::Memory { key, value } => {
                debug!(key = %key, "storing remembered fact");
                {
                    let mut memory = self.memory.lock().await;
                    memory.remember(&key, &value, "general");
                }
                format!("Got it! I'll remember that {key} is {value}.")
            }
        }
    }

    /// Returns the memory summary lines for prompt injection.
    pub async fn memory_summary(&self) -> Vec<String> {
        self.memory.lock().await.summary()
    }

    /// Looks up a remembered fact, refreshing its last-used timestamp.
    pub async fn recall(&self, key: &str) -> Option<String> {
        self.memory.lock().await.recall(key)
    }

    /// Returns a snapshot of the conversation history.
    pub async fn history_snapshot(&self) -> Vec<ConversationTurn> {
        self.history.lock().await.clone()
    }
}

/// Renders history as the backend prompt: one role-prefixed line per turn.
fn render_prompt(history: &[ConversationTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("{}: {}", turn.role.to_string().to_uppercase(), turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Maps a decode failure to its fixed user-visible text.
fn decode_failure_text(error: DecodeError) -> &'static str {
    match error {
        DecodeError::Unparsable => UNPARSABLE_TEXT,
        DecodeError::UnknownType => UNKNOWN_TYPE_TEXT,
        DecodeError::IncompleteMemory => INCOMPLETE_MEMORY_TEXT,
    }
}
