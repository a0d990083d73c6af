// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Nova workspace.
//!
//! The conversation model is deliberately small: an ordered sequence of
//! role-tagged [`ConversationTurn`]s whose first element is always the
//! protocol preamble, and a typed [`Action`] decoded from each model reply.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a single conversation turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in the conversation history.
///
/// History is append-only; insertion order is conversational order. The
/// first turn is the single system turn carrying the protocol preamble and
/// is never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    /// Creates the system turn carrying the protocol preamble.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn holding the raw model text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The decoded, typed result of interpreting one model response.
///
/// Exactly one variant per reply; unrecognized or malformed payloads are a
/// decode failure in `nova-protocol`, never a silently-empty action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A plain spoken reply.
    Text { response: String },
    /// A call into the capability registry.
    Function {
        name: String,
        args: HashMap<String, String>,
    },
    /// An instruction to persist a fact in long-term memory.
    Memory { key: String, value: String },
}

/// Describes one named capability the model may call.
///
/// Static for the process lifetime; used to validate dispatch and to render
/// the function catalog embedded in the system preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    /// Unique capability name.
    pub name: String,
    /// Declared parameter names, in call order.
    pub parameters: Vec<String>,
}

impl CapabilityDescriptor {
    pub fn new(name: impl Into<String>, parameters: &[&str]) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Renders the catalog line for this capability: `name(param1, param2)`.
    pub fn render(&self) -> String {
        format!("{}({})", self.name, self.parameters.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_display_is_lowercase() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::System, Role::User, Role::Assistant] {
            let parsed = Role::from_str(&role.to_string()).expect("should parse back");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn turn_constructors_set_role() {
        assert_eq!(ConversationTurn::system("p").role, Role::System);
        assert_eq!(ConversationTurn::user("hi").role, Role::User);
        assert_eq!(ConversationTurn::assistant("ok").role, Role::Assistant);
    }

    #[test]
    fn descriptor_renders_parameter_list() {
        let desc = CapabilityDescriptor::new("get_time", &["time"]);
        assert_eq!(desc.render(), "get_time(time)");

        let no_params = CapabilityDescriptor::new("get_date", &[]);
        assert_eq!(no_params.render(), "get_date()");
    }
}
