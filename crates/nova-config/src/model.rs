// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Nova voice assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Nova configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NovaConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Language-model backend settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Long-term memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Speech recognition and synthesis settings.
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Introspection (autonomous thinking) loop settings.
    #[serde(default)]
    pub introspection: IntrospectionConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "nova".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Language-model backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Model identifier passed to the backend.
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Generation endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. A hung backend is treated as a
    /// transport failure once this expires.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_model_name() -> String {
    "mistral".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

/// Long-term memory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Path of the persisted memory file (JSON mapping keyed by fact key).
    #[serde(default = "default_memory_path")]
    pub path: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_memory_path(),
        }
    }
}

fn default_memory_path() -> String {
    "nova_memory.json".to_string()
}

/// Speech recognition and synthesis configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Path of the Vosk model directory used by the transcriber.
    #[serde(default = "default_vosk_model")]
    pub vosk_model: String,

    /// Path of the Piper voice model.
    #[serde(default = "default_piper_model")]
    pub piper_model: String,

    /// Path of the Piper voice model config.
    #[serde(default = "default_piper_config")]
    pub piper_config: String,

    /// Capture sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Length of each capture window in seconds. The recognizer treats one
    /// window as one utterance; silent windows yield empty transcripts.
    #[serde(default = "default_capture_secs")]
    pub capture_secs: u64,

    /// External recorder binary (writes a WAV from the default microphone).
    #[serde(default = "default_recorder_bin")]
    pub recorder_bin: String,

    /// External transcriber binary (reads a WAV, prints Vosk-style JSON).
    #[serde(default = "default_transcriber_bin")]
    pub transcriber_bin: String,

    /// External synthesis binary.
    #[serde(default = "default_piper_bin")]
    pub piper_bin: String,

    /// External playback binary.
    #[serde(default = "default_player_bin")]
    pub player_bin: String,

    /// Directory for intermediate WAV artifacts. Defaults to the system
    /// temp directory when empty.
    #[serde(default)]
    pub scratch_dir: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            vosk_model: default_vosk_model(),
            piper_model: default_piper_model(),
            piper_config: default_piper_config(),
            sample_rate: default_sample_rate(),
            capture_secs: default_capture_secs(),
            recorder_bin: default_recorder_bin(),
            transcriber_bin: default_transcriber_bin(),
            piper_bin: default_piper_bin(),
            player_bin: default_player_bin(),
            scratch_dir: String::new(),
        }
    }
}

fn default_vosk_model() -> String {
    "vosk_models/vosk-model-en-us-0.42-gigaspeech".to_string()
}

fn default_piper_model() -> String {
    "piper_models/en_US-libritts-high.onnx".to_string()
}

fn default_piper_config() -> String {
    "piper_models/en_US-libritts-high.onnx.json".to_string()
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_capture_secs() -> u64 {
    5
}

fn default_recorder_bin() -> String {
    "arecord".to_string()
}

fn default_transcriber_bin() -> String {
    "vosk-transcriber".to_string()
}

fn default_piper_bin() -> String {
    "piper".to_string()
}

fn default_player_bin() -> String {
    "play".to_string()
}

/// Introspection loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntrospectionConfig {
    /// Whether the introspection loop runs at all.
    #[serde(default = "default_introspection_enabled")]
    pub enabled: bool,

    /// Period between introspection cycles, in seconds.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            enabled: default_introspection_enabled(),
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_introspection_enabled() -> bool {
    true
}

fn default_interval_secs() -> u64 {
    15
}
