// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Utterance capture via external recorder and transcriber binaries.
//!
//! One capture window is one utterance: the recorder writes a fixed-length
//! WAV from the default microphone, the Vosk CLI transcribes it, and a
//! silent window yields an empty transcript. The external services own the
//! utterance boundary; this wrapper only shuttles audio between them.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use nova_config::model::SpeechConfig;
use nova_core::{NovaError, SpeechRecognizer};

/// Speech recognizer wrapping an external recorder + Vosk transcriber pair.
pub struct VoskRecognizer {
    recorder_bin: String,
    transcriber_bin: String,
    vosk_model: String,
    sample_rate: u32,
    capture_secs: u64,
    wav_path: PathBuf,
}

impl VoskRecognizer {
    /// Creates a recognizer from the speech configuration.
    pub fn new(config: &SpeechConfig) -> Self {
        let scratch = if config.scratch_dir.is_empty() {
            std::env::temp_dir()
        } else {
            PathBuf::from(&config.scratch_dir)
        };
        Self {
            recorder_bin: config.recorder_bin.clone(),
            transcriber_bin: config.transcriber_bin.clone(),
            vosk_model: config.vosk_model.clone(),
            sample_rate: config.sample_rate,
            capture_secs: config.capture_secs,
            wav_path: scratch.join("nova_capture.wav"),
        }
    }

    /// Records one capture window to the scratch WAV.
    async fn record_window(&self) -> Result<(), NovaError> {
        let status = tokio::process::Command::new(&self.recorder_bin)
            .args([
                "-q",
                "-f",
                "S16_LE",
                "-r",
                &self.sample_rate.to_string(),
                "-c",
                "1",
                "-d",
                &self.capture_secs.to_string(),
            ])
            .arg(&self.wav_path)
            .status()
            .await
            .map_err(|e| NovaError::Speech {
                message: format!("failed to launch recorder `{}`: {e}", self.recorder_bin),
                source: Some(Box::new(e)),
            })?;

        if !status.success() {
            return Err(NovaError::Speech {
                message: format!("recorder `{}` exited with {status}", self.recorder_bin),
                source: None,
            });
        }
        Ok(())
    }

    /// Transcribes the scratch WAV and returns the (possibly empty) text.
    async fn transcribe_window(&self) -> Result<String, NovaError> {
        let output = tokio::process::Command::new(&self.transcriber_bin)
            .args(["--model", &self.vosk_model])
            .arg(&self.wav_path)
            .output()
            .await
            .map_err(|e| NovaError::Speech {
                message: format!(
                    "failed to launch transcriber `{}`: {e}",
                    self.transcriber_bin
                ),
                source: Some(Box::new(e)),
            })?;

        if !output.status.success() {
            return Err(NovaError::Speech {
                message: format!(
                    "transcriber `{}` exited with {}",
                    self.transcriber_bin, output.status
                ),
                source: None,
            });
        }

        Ok(parse_transcript(&String::from_utf8_lossy(&output.stdout)))
    }
}

#[async_trait]
impl SpeechRecognizer for VoskRecognizer {
    async fn next_utterance(&self) -> Result<String, NovaError> {
        self.record_window().await?;
        let text = self.transcribe_window().await?;
        if !text.is_empty() {
            debug!(text = %text, "utterance recognized");
        }
        Ok(text)
    }
}

/// Extracts the transcript from transcriber output.
///
/// The Vosk CLI prints a JSON object with a `text` field; plain-text output
/// from other transcribers is accepted as-is.
fn parse_transcript(stdout: &str) -> String {
    let trimmed = stdout.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed)
        && let Some(text) = value.get("text").and_then(|t| t.as_str())
    {
        return text.trim().to_string();
    }
    trimmed.to_string()
}
