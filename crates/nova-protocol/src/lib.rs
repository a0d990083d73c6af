// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response protocol codec for the Nova voice assistant.
//!
//! Model output is free text that must be interpreted as exactly one typed
//! [`Action`](nova_core::Action): a plain reply, a function call, or a
//! memory instruction. This crate renders the system preamble describing the
//! protocol and decodes raw completions back into actions.

pub mod decode;
pub mod preamble;

pub use decode::{decode, DecodeError};
pub use preamble::encode_preamble;
