// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The proactive introspection loop.
//!
//! On a fixed period the [`IntrospectionRunner`] composes an internal
//! status prompt (system stats, memory summary, previous thought), submits
//! it through the conversation engine exactly as a user turn would be
//! submitted, and speaks the result unless it is the "all good"
//! acknowledgment.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use nova_core::{SpeechSynthesizer, StatsProbe};

use crate::engine::ConversationEngine;

/// Sentinel phrase suppressing spoken output, matched case-insensitively.
pub const ALL_GOOD_SENTINEL: &str = "all good";

/// The no-op acknowledgment the model is instructed to default to.
const ALL_GOOD_RESPONSE: &str = "All good for now.";

/// Proactive control loop: periodic self-prompting without user input.
pub struct IntrospectionRunner {
    engine: Arc<ConversationEngine>,
    probes: Vec<Arc<dyn StatsProbe>>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    interval: Duration,
    /// Owned solely by this loop; carried into the next cycle's prompt.
    previous_thought: Mutex<Option<String>>,
    shutdown: CancellationToken,
}

impl IntrospectionRunner {
    pub fn new(
        engine: Arc<ConversationEngine>,
        probes: Vec<Arc<dyn StatsProbe>>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            engine,
            probes,
            synthesizer,
            interval,
            previous_thought: Mutex::new(None),
            shutdown,
        }
    }

    /// Runs cycles on the configured period until the token is cancelled.
    ///
    /// `tokio::time::interval` accounts for cycle execution time, so the
    /// loop sleeps only for the remaining interval.
    pub async fn run(&self) {
        info!(interval_secs = self.interval.as_secs(), "introspection loop active");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("introspection loop stopped");
                    break;
                }
                _ = ticker.tick() => {
                    self.execute().await;
                }
            }
        }
    }

    /// Executes one introspection cycle.
    pub async fn execute(&self) {
        let mut status_lines = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            status_lines.push(probe.read().await);
        }
        let memory_lines = self.engine.memory_summary().await;
        let previous = self.previous_thought.lock().await.clone();

        let prompt = build_introspection_prompt(&status_lines, &memory_lines, previous.as_deref());
        let result = self.engine.submit(&prompt).await;

        *self.previous_thought.lock().await = Some(result.clone());

        if result.to_lowercase().contains(ALL_GOOD_SENTINEL) {
            debug!("nothing notable this cycle");
            return;
        }

        info!(thought = %result, "speaking proactive thought");
        if let Err(e) = self.synthesizer.speak(&result).await {
            warn!(error = %e, "failed to speak proactive thought");
        }
    }
}

/// Composes the internal prompt for one introspection cycle.
fn build_introspection_prompt(
    status_lines: &[String],
    memory_lines: &[String],
    previous_thought: Option<&str>,
) -> String {
    let status_text = status_lines.join("\n");
    let memory_text = if memory_lines.is_empty() {
        "No memory stored yet.".to_string()
    } else {
        memory_lines.join("\n")
    };
    let previous = previous_thought
        .map(|t| format!("Previous thought: {t}\n"))
        .unwrap_or_default();

    format!(
        r#"[internal system check]

You are thinking independently. Here is your world:

System Status:
{status_text}

User Memory:
{memory_text}

{previous}Your task:
- Decide if anything needs to be done, warned about, or remembered.
- You may call a function, say something, remember a fact, or do nothing.

If everything is fine, respond with:
{{ "type": "text", "response": "{ALL_GOOD_RESPONSE}" }}"#
    )
}
