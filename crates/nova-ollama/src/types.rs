// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Ollama generate API.

use serde::{Deserialize, Serialize};

/// Request body for `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier known to the backend.
    pub model: String,
    /// Fully rendered prompt (role-prefixed conversation history).
    pub prompt: String,
    /// Always false; Nova consumes whole completions.
    pub stream: bool,
}

/// Response body from `/api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The completion text.
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_fields() {
        let request = GenerateRequest {
            model: "mistral".into(),
            prompt: "SYSTEM: hi".into(),
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn response_tolerates_extra_fields() {
        let body = r#"{"model": "mistral", "response": "ok", "done": true}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "ok");
    }
}
