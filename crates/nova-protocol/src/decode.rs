// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-stage decoding of model output into a typed [`Action`].
//!
//! Models are unreliable JSON emitters. The decoder first attempts a strict
//! parse of the whole reply, then falls back to the outermost brace-delimited
//! substring (tolerating JSON wrapped in prose or markdown fences). Failure
//! of both stages is an explicit [`DecodeError`], never a silent default.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use nova_core::Action;

/// Terminal failure modes of the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Neither the whole reply nor any embedded substring parsed as JSON.
    #[error("model output is not parsable JSON")]
    Unparsable,

    /// A `memory` payload was missing `key` or `value`.
    #[error("memory instruction is missing key or value")]
    IncompleteMemory,

    /// The `type` field was absent or not one of `function`/`text`/`memory`.
    #[error("unknown or missing response type")]
    UnknownType,
}

/// Raw wire shape of a model reply, tolerant of missing fields.
#[derive(Debug, Deserialize)]
struct WirePayload {
    #[serde(rename = "type")]
    kind: Option<String>,
    function: Option<String>,
    args: Option<serde_json::Map<String, serde_json::Value>>,
    response: Option<String>,
    key: Option<String>,
    value: Option<String>,
}

/// Parses `raw` model output into exactly one [`Action`].
pub fn decode(raw: &str) -> Result<Action, DecodeError> {
    let payload = parse_payload(raw).ok_or(DecodeError::Unparsable)?;

    match payload.kind.as_deref() {
        Some("function") => Ok(Action::Function {
            name: payload.function.unwrap_or_default(),
            args: payload.args.map(stringify_args).unwrap_or_default(),
        }),
        Some("text") => Ok(Action::Text {
            response: payload.response.unwrap_or_default(),
        }),
        Some("memory") => match (payload.key, payload.value) {
            (Some(key), Some(value)) => Ok(Action::Memory { key, value }),
            _ => Err(DecodeError::IncompleteMemory),
        },
        _ => Err(DecodeError::UnknownType),
    }
}

/// Stage 1: strict whole-string parse. Stage 2: outermost `{...}` substring.
fn parse_payload(raw: &str) -> Option<WirePayload> {
    if let Ok(payload) = serde_json::from_str::<WirePayload>(raw) {
        return Some(payload);
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<WirePayload>(&raw[start..=end]).ok()
}

/// Flattens decoded argument values to text.
///
/// The protocol declares args as a text-to-text mapping, but models
/// occasionally emit numbers or booleans; those are rendered through their
/// JSON representation rather than rejected.
fn stringify_args(args: serde_json::Map<String, serde_json::Value>) -> HashMap<String, String> {
    args.into_iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (k, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_payload_decodes_verbatim() {
        let action = decode(r#"{"type": "text", "response": "hello there"}"#).unwrap();
        assert_eq!(
            action,
            Action::Text {
                response: "hello there".into()
            }
        );
    }

    #[test]
    fn empty_response_text_is_preserved() {
        let action = decode(r#"{"type": "text", "response": ""}"#).unwrap();
        assert_eq!(action, Action::Text { response: "".into() });
    }

    #[test]
    fn missing_response_defaults_to_empty_text() {
        let action = decode(r#"{"type": "text"}"#).unwrap();
        assert_eq!(action, Action::Text { response: "".into() });
    }

    #[test]
    fn function_payload_decodes_name_and_args() {
        let action =
            decode(r#"{"type": "function", "function": "get_time", "args": {"time": "now"}}"#)
                .unwrap();
        let Action::Function { name, args } = action else {
            panic!("expected function action");
        };
        assert_eq!(name, "get_time");
        assert_eq!(args.get("time").map(String::as_str), Some("now"));
    }

    #[test]
    fn missing_args_defaults_to_empty_mapping() {
        let action = decode(r#"{"type": "function", "function": "get_date"}"#).unwrap();
        let Action::Function { name, args } = action else {
            panic!("expected function action");
        };
        assert_eq!(name, "get_date");
        assert!(args.is_empty());
    }

    #[test]
    fn non_string_arg_values_are_stringified() {
        let action =
            decode(r#"{"type": "function", "function": "f", "args": {"count": 3}}"#).unwrap();
        let Action::Function { args, .. } = action else {
            panic!("expected function action");
        };
        assert_eq!(args.get("count").map(String::as_str), Some("3"));
    }

    #[test]
    fn memory_payload_decodes_key_and_value() {
        let action = decode(r#"{"type": "memory", "key": "color", "value": "blue"}"#).unwrap();
        assert_eq!(
            action,
            Action::Memory {
                key: "color".into(),
                value: "blue".into()
            }
        );
    }

    #[test]
    fn memory_missing_key_is_incomplete() {
        assert_eq!(
            decode(r#"{"type": "memory", "value": "blue"}"#),
            Err(DecodeError::IncompleteMemory)
        );
    }

    #[test]
    fn memory_missing_value_is_incomplete() {
        assert_eq!(
            decode(r#"{"type": "memory", "key": "color"}"#),
            Err(DecodeError::IncompleteMemory)
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            decode(r#"{"type": "sing", "response": "la"}"#),
            Err(DecodeError::UnknownType)
        );
    }

    #[test]
    fn missing_type_is_rejected() {
        assert_eq!(
            decode(r#"{"response": "hi"}"#),
            Err(DecodeError::UnknownType)
        );
    }

    #[test]
    fn json_embedded_in_prose_decodes_via_fallback() {
        let action = decode(r#"Sure! {"type": "text", "response": "hi"} Hope that helps."#).unwrap();
        assert_eq!(action, Action::Text { response: "hi".into() });
    }

    #[test]
    fn json_in_markdown_fence_decodes_via_fallback() {
        let raw = "```json\n{\"type\": \"text\", \"response\": \"fenced\"}\n```";
        let action = decode(raw).unwrap();
        assert_eq!(
            action,
            Action::Text {
                response: "fenced".into()
            }
        );
    }

    #[test]
    fn plain_prose_is_unparsable() {
        assert_eq!(decode("I'm sorry, I can't do that."), Err(DecodeError::Unparsable));
    }

    #[test]
    fn garbage_inside_braces_is_unparsable() {
        assert_eq!(decode("well {not json at all} indeed"), Err(DecodeError::Unparsable));
    }
}
