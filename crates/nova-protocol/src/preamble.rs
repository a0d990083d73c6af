// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System preamble rendering.
//!
//! The preamble is the immutable first turn of every conversation: it fixes
//! the agent persona, lists the callable capabilities, and pins the model to
//! the three allowed JSON reply shapes.

use nova_core::CapabilityDescriptor;

/// Renders the fixed system instruction embedding the capability catalog.
pub fn encode_preamble(agent_name: &str, capabilities: &[CapabilityDescriptor]) -> String {
    let catalog = capabilities
        .iter()
        .map(|c| format!("- {}", c.render()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are {agent_name}, an offline virtual assistant with a friendly and confident personality.
You may speak with charm and warmth, but always reply in strict JSON.

You can call the following functions:
{catalog}

Respond using one of these formats:

1. Function call:
{{
  "type": "function",
  "function": "function_name",
  "args": {{ "arg": "value" }}
}}

2. Text response:
{{
  "type": "text",
  "response": "your reply here"
}}

3. Memory instruction:
{{
  "type": "memory",
  "key": "something_to_remember",
  "value": "value"
}}

Always return valid JSON. Never return anything else. No markdown, no explanations."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_capabilities() -> Vec<CapabilityDescriptor> {
        vec![
            CapabilityDescriptor::new("get_time", &["time"]),
            CapabilityDescriptor::new("get_date", &[]),
        ]
    }

    #[test]
    fn preamble_lists_capabilities_in_order() {
        let preamble = encode_preamble("nova", &sample_capabilities());
        let time_pos = preamble.find("get_time(time)").unwrap();
        let date_pos = preamble.find("get_date()").unwrap();
        assert!(time_pos < date_pos);
    }

    #[test]
    fn preamble_names_the_agent() {
        let preamble = encode_preamble("nova", &sample_capabilities());
        assert!(preamble.starts_with("You are nova,"));
    }

    #[test]
    fn preamble_describes_all_three_shapes() {
        let preamble = encode_preamble("nova", &[]);
        for shape in ["\"function\"", "\"text\"", "\"memory\""] {
            assert!(preamble.contains(shape), "missing shape {shape}");
        }
    }
}
