// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup checks for required speech models.
//!
//! Missing models are the one unrecoverable condition in the assistant:
//! initialization must abort with a clear error before either loop starts.

use std::path::Path;

use nova_config::model::SpeechConfig;
use nova_core::NovaError;

/// Verifies that the Vosk model directory and the Piper model/config files
/// exist.
pub fn check_speech_models(config: &SpeechConfig) -> Result<(), NovaError> {
    if !Path::new(&config.vosk_model).is_dir() {
        return Err(NovaError::Speech {
            message: format!(
                "Vosk model not found at `{}`. Make sure to download it.",
                config.vosk_model
            ),
            source: None,
        });
    }

    for (label, path) in [
        ("Piper model", &config.piper_model),
        ("Piper config", &config.piper_config),
    ] {
        if !Path::new(path).is_file() {
            return Err(NovaError::Speech {
                message: format!("{label} not found at `{path}`."),
                source: None,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> SpeechConfig {
        SpeechConfig {
            vosk_model: dir.join("vosk").display().to_string(),
            piper_model: dir.join("voice.onnx").display().to_string(),
            piper_config: dir.join("voice.onnx.json").display().to_string(),
            ..SpeechConfig::default()
        }
    }

    #[test]
    fn all_models_present_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir(&config.vosk_model).unwrap();
        std::fs::write(&config.piper_model, b"onnx").unwrap();
        std::fs::write(&config.piper_config, b"{}").unwrap();

        assert!(check_speech_models(&config).is_ok());
    }

    #[test]
    fn missing_vosk_model_fails_with_clear_message() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = check_speech_models(&config).unwrap_err();
        assert!(err.to_string().contains("Vosk model not found"));
    }

    #[test]
    fn missing_piper_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir(&config.vosk_model).unwrap();
        std::fs::write(&config.piper_model, b"onnx").unwrap();

        let err = check_speech_models(&config).unwrap_err();
        assert!(err.to_string().contains("Piper config"));
    }
}
