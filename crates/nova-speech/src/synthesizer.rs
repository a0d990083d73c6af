// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech synthesis via Piper with serialized playback.
//!
//! Text is piped to the `piper` binary which writes a WAV artifact; the
//! artifact is then played with an external player. An internal lock is
//! held for the full synthesis plus playback duration so the speech loop
//! and the introspection loop never talk over each other.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;

use nova_config::model::SpeechConfig;
use nova_core::{NovaError, SpeechSynthesizer};

/// Speech synthesizer wrapping the Piper CLI and an external player.
pub struct PiperSynthesizer {
    piper_bin: String,
    player_bin: String,
    model: String,
    model_config: String,
    wav_path: PathBuf,
    /// Guards the output channel across synthesis and playback.
    channel: Mutex<()>,
}

impl PiperSynthesizer {
    /// Creates a synthesizer from the speech configuration.
    pub fn new(config: &SpeechConfig) -> Self {
        let scratch = if config.scratch_dir.is_empty() {
            std::env::temp_dir()
        } else {
            PathBuf::from(&config.scratch_dir)
        };
        Self {
            piper_bin: config.piper_bin.clone(),
            player_bin: config.player_bin.clone(),
            model: config.piper_model.clone(),
            model_config: config.piper_config.clone(),
            wav_path: scratch.join("nova_speech.wav"),
            channel: Mutex::new(()),
        }
    }

    /// Runs Piper with `text` on stdin, producing the WAV artifact.
    async fn synthesize(&self, text: &str) -> Result<(), NovaError> {
        let mut child = tokio::process::Command::new(&self.piper_bin)
            .args(["--model", &self.model, "--config", &self.model_config])
            .arg("--output_file")
            .arg(&self.wav_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NovaError::Speech {
                message: format!("failed to launch `{}`: {e}", self.piper_bin),
                source: Some(Box::new(e)),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| NovaError::Speech {
                    message: format!("failed to write text to synthesizer: {e}"),
                    source: Some(Box::new(e)),
                })?;
            // Dropping stdin closes the pipe so piper sees EOF.
        }

        let status = child.wait().await.map_err(|e| NovaError::Speech {
            message: format!("synthesizer did not complete: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.success() {
            return Err(NovaError::Speech {
                message: format!("`{}` exited with {status}", self.piper_bin),
                source: None,
            });
        }

        // The artifact must exist and be non-empty, or synthesis failed
        // silently.
        let artifact_ok = tokio::fs::metadata(&self.wav_path)
            .await
            .map(|m| m.len() > 0)
            .unwrap_or(false);
        if !artifact_ok {
            return Err(NovaError::Speech {
                message: "synthesizer produced no audio".into(),
                source: None,
            });
        }

        Ok(())
    }

    /// Plays the WAV artifact to completion.
    async fn play(&self) -> Result<(), NovaError> {
        let status = tokio::process::Command::new(&self.player_bin)
            .arg(&self.wav_path)
            .status()
            .await
            .map_err(|e| NovaError::Speech {
                message: format!("failed to launch player `{}`: {e}", self.player_bin),
                source: Some(Box::new(e)),
            })?;

        if !status.success() {
            return Err(NovaError::Speech {
                message: format!("player `{}` exited with {status}", self.player_bin),
                source: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SpeechSynthesizer for PiperSynthesizer {
    async fn speak(&self, text: &str) -> Result<(), NovaError> {
        for (label, path) in [
            ("Piper model", &self.model),
            ("Piper config", &self.model_config),
        ] {
            if !Path::new(path).is_file() {
                return Err(NovaError::Speech {
                    message: format!("{label} missing at `{path}`"),
                    source: None,
                });
            }
        }

        // Held across synthesis and playback: spoken outputs from the two
        // loops must never overlap or interleave.
        let _channel = self.channel.lock().await;

        info!(text = %text, "speaking");
        self.synthesize(text).await?;
        self.play().await
    }
}
