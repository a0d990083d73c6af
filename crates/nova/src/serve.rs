// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nova serve` command implementation.
//!
//! Starts the full assistant: verifies required speech models, wires the
//! Ollama backend, memory store, capability registry, and speech services
//! into one conversation engine, then runs the speech loop and the
//! introspection loop until shutdown.

use std::sync::Arc;
use std::time::Duration;

use nova_agent::shutdown;
use nova_agent::{ConversationEngine, IntrospectionRunner, SpeechLoop};
use nova_config::model::NovaConfig;
use nova_core::NovaError;
use nova_memory::MemoryStore;
use nova_ollama::OllamaClient;
use nova_speech::{check_speech_models, PiperSynthesizer, VoskRecognizer};
use tracing::info;

/// Runs the `nova serve` command.
///
/// Missing speech models abort initialization with a clear error before
/// either loop starts; everything after that point recovers locally.
pub async fn run_serve(config: NovaConfig) -> Result<(), NovaError> {
    init_tracing(&config.agent.log_level);

    info!(agent = %config.agent.name, "starting nova");

    check_speech_models(&config.speech)?;

    let memory = MemoryStore::open(&config.memory.path);
    let registry = Arc::new(nova_skill::builtin_registry());
    let backend = Arc::new(OllamaClient::new(&config.model)?);
    let engine = Arc::new(ConversationEngine::new(
        &config.agent.name,
        backend,
        registry,
        memory,
    ));

    let recognizer = Arc::new(VoskRecognizer::new(&config.speech));
    let synthesizer = Arc::new(PiperSynthesizer::new(&config.speech));

    let token = shutdown::install_signal_handler();

    let introspection_task = if config.introspection.enabled {
        let runner = IntrospectionRunner::new(
            engine.clone(),
            nova_stats::default_probes(),
            synthesizer.clone(),
            Duration::from_secs(config.introspection.interval_secs),
            token.clone(),
        );
        Some(tokio::spawn(async move { runner.run().await }))
    } else {
        info!("introspection loop disabled by config");
        None
    };

    let speech_loop = SpeechLoop::new(engine, recognizer, synthesizer, token);
    let speech_task = tokio::spawn(async move { speech_loop.run().await });

    // The speech loop exits on its exit phrase or a signal; either way the
    // shared token is cancelled and the introspection loop follows.
    let _ = speech_task.await;
    if let Some(task) = introspection_task {
        let _ = task.await;
    }

    info!("nova stopped");
    Ok(())
}

/// Installs the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nova={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
